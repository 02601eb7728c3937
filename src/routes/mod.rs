//! Actix handlers for the supplier page and shared rendering helpers.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::dto::main::{IndexPageData, Notification, Severity};

pub mod main;
pub mod supplier;

/// Registers every page route. `/supplier/new` must precede `/supplier/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_index)
        .service(main::new_supplier)
        .service(supplier::save_supplier)
        .service(supplier::import_suppliers)
        .service(supplier::delete_supplier)
        .service(supplier::show_supplier);
}

/// Maps a flash message level to the CSS alert class used by the template.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

fn severity_to_str(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "success",
        Severity::Error => "danger",
    }
}

/// Sends a notification to be displayed after the next redirect.
pub fn flash(notification: &Notification) {
    match notification.severity {
        Severity::Success => FlashMessage::success(notification.message()).send(),
        Severity::Error => FlashMessage::error(notification.message()).send(),
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn index_location(page: usize) -> String {
    format!("/?page={page}")
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Builds the index template context: pending flash alerts followed by the
/// page's own notification, then the page data.
pub fn index_context(flash_messages: &IncomingFlashMessages, data: &IndexPageData) -> Context {
    let mut alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    if let Some(notification) = &data.notification {
        alerts.push((
            notification.message(),
            severity_to_str(notification.severity),
        ));
    }

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("suppliers", &data.suppliers);
    context.insert("dialog", &data.dialog);
    context
}

pub fn render_index(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    data: &IndexPageData,
) -> HttpResponse {
    render_template(tera, "main/index.html", &index_context(flash_messages, data))
}
