use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::main::{DialogState, IndexQuery};
use crate::forms::FieldErrors;
use crate::forms::supplier::SupplierForm;
use crate::gateway::HttpSupplierGateway;
use crate::routes::render_index;
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    query: web::Query<IndexQuery>,
    gateway: web::Data<HttpSupplierGateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data =
        main_service::load_index_page(gateway.get_ref(), query.into_inner(), None, None).await;

    render_index(&tera, &flash_messages, &data)
}

#[get("/supplier/new")]
pub async fn new_supplier(
    query: web::Query<IndexQuery>,
    gateway: web::Data<HttpSupplierGateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    let dialog = DialogState::new(SupplierForm::create(query.page()), FieldErrors::new());

    let data = main_service::load_index_page(gateway.get_ref(), query, Some(dialog), None).await;

    render_index(&tera, &flash_messages, &data)
}
