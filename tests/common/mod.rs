//! Fake supplier backend served by Actix on an ephemeral port.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};

pub const API_PREFIX: &str = "/neostore/api";

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    /// Path relative to [`API_PREFIX`].
    pub path: String,
    pub query: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Default)]
pub struct BackendState {
    requests: Mutex<Vec<RecordedRequest>>,
    /// Canned responses keyed by `"METHOD /path"`.
    responses: Mutex<HashMap<String, (u16, String)>>,
}

impl BackendState {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub struct FakeBackend {
    pub base_url: String,
    pub state: web::Data<BackendState>,
    handle: ServerHandle,
}

impl FakeBackend {
    /// Starts a backend answering `200 {}` to every request.
    pub async fn start() -> Self {
        let state = web::Data::new(BackendState::default());
        let app_state = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .default_service(web::to(record_and_respond))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("fake backend binds");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            state,
            handle,
        }
    }

    /// Answers `method path` with `status` and the JSON `body`.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: serde_json::Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn record_and_respond(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<BackendState>,
) -> HttpResponse {
    let path = req
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(req.path())
        .to_string();
    let method = req.method().to_string();

    let key = format!("{method} {path}");
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path,
        query: req.query_string().to_string(),
        content_type: req
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let (status, body) = state
        .responses
        .lock()
        .unwrap()
        .get(&key)
        .cloned()
        .unwrap_or((200, "{}".to_string()));

    HttpResponse::build(
        actix_web::http::StatusCode::from_u16(status).expect("valid status code"),
    )
    .content_type("application/json")
    .body(body)
}
