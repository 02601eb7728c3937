use neostore_suppliers::domain::supplier::Supplier;
use neostore_suppliers::domain::types::SupplierId;
use neostore_suppliers::gateway::errors::GatewayError;
use neostore_suppliers::gateway::{HttpSupplierGateway, SupplierReader, SupplierWriter};
use serde_json::json;

mod common;

use common::FakeBackend;

fn supplier(id: Option<i64>) -> Supplier {
    Supplier {
        id: id.map(|id| SupplierId::new(id).unwrap()),
        name: "ACME".to_string(),
        email: "acme@example.com".to_string(),
        description: "Parafusos".to_string(),
        cnpj: "11.222.333/0001-81".to_string(),
    }
}

#[actix_web::test]
async fn list_requests_the_page_and_decodes_records() {
    let backend = FakeBackend::start().await;
    backend.respond(
        "GET",
        "/fornecedor",
        200,
        json!({
            "records": [{"id": 1, "name": "ACME", "email": "acme@example.com",
                         "description": "Parafusos", "cnpj": "11.222.333/0001-81"}],
            "total_records": 11,
        }),
    );
    let gateway = HttpSupplierGateway::new(&backend.base_url).unwrap();

    let listing = gateway.list_suppliers(3).await.unwrap();

    let records = listing.records.unwrap();
    assert_eq!(records, vec![supplier(Some(1))]);
    assert_eq!(listing.total_records, Some(11));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/fornecedor");
    assert_eq!(requests[0].query, "page=3");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));

    backend.stop().await;
}

#[actix_web::test]
async fn list_tolerates_an_empty_body_object() {
    let backend = FakeBackend::start().await;
    let gateway = HttpSupplierGateway::new(&backend.base_url).unwrap();

    let listing = gateway.list_suppliers(1).await.unwrap();

    assert_eq!(listing.records, None);
    assert_eq!(listing.total_records, None);

    backend.stop().await;
}

#[actix_web::test]
async fn get_one_uses_the_id_path() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/fornecedor/0", 200, json!({"id": 0, "name": "Zero"}));
    let gateway = HttpSupplierGateway::new(&backend.base_url).unwrap();

    let found = gateway.get_supplier(SupplierId::new(0).unwrap()).await.unwrap();

    assert_eq!(found.name, "Zero");
    assert_eq!(found.id, Some(SupplierId::new(0).unwrap()));

    backend.stop().await;
}

#[actix_web::test]
async fn writes_use_the_documented_methods_and_paths() {
    let backend = FakeBackend::start().await;
    let gateway = HttpSupplierGateway::new(&backend.base_url).unwrap();
    let id = SupplierId::new(7).unwrap();

    gateway.create_supplier(&supplier(None)).await.unwrap();
    gateway
        .create_suppliers_from_json(r#"[{"name": "ACME"}]"#)
        .await
        .unwrap();
    gateway.update_supplier(id, &supplier(Some(7))).await.unwrap();
    gateway.delete_supplier(id).await.unwrap();

    let requests = backend.requests();
    let calls: Vec<(&str, &str)> = requests
        .iter()
        .map(|r| (r.method.as_str(), r.path.as_str()))
        .collect();
    assert_eq!(
        calls,
        vec![
            ("POST", "/fornecedor"),
            ("POST", "/fornecedor/from_json"),
            ("PUT", "/fornecedor/7"),
            ("DELETE", "/fornecedor/7"),
        ]
    );

    assert!(
        requests
            .iter()
            .all(|r| r.content_type.as_deref() == Some("application/json"))
    );

    let created = requests[0].json();
    assert!(created.get("id").is_none());
    assert_eq!(created["cnpj"], "11.222.333/0001-81");

    assert_eq!(requests[1].body, r#"[{"name": "ACME"}]"#);
    assert_eq!(requests[2].json()["id"], 7);
    assert!(requests[3].body.is_empty());

    backend.stop().await;
}

#[actix_web::test]
async fn rejection_carries_the_first_backend_message() {
    let backend = FakeBackend::start().await;
    backend.respond(
        "POST",
        "/fornecedor",
        400,
        json!([{"message": "CNPJ já cadastrado"}, {"message": "E-mail já cadastrado"}]),
    );
    let gateway = HttpSupplierGateway::new(&backend.base_url).unwrap();

    let err = gateway.create_supplier(&supplier(None)).await.unwrap_err();

    assert!(matches!(err, GatewayError::Rejected { status: 400, .. }));
    assert_eq!(err.backend_message(), Some("CNPJ já cadastrado"));

    backend.stop().await;
}

#[actix_web::test]
async fn unreachable_backend_is_a_transport_error() {
    let backend = FakeBackend::start().await;
    let base_url = backend.base_url.clone();
    backend.stop().await;

    let gateway = HttpSupplierGateway::new(base_url).unwrap();
    let err = gateway.list_suppliers(1).await.unwrap_err();

    assert!(matches!(err, GatewayError::Transport(_)));
    assert_eq!(err.backend_message(), None);
}
