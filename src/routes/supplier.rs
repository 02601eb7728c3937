use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::main::{DialogState, IndexQuery, Notification};
use crate::forms::FieldErrors;
use crate::forms::import::ImportSuppliersForm;
use crate::forms::supplier::SupplierForm;
use crate::gateway::HttpSupplierGateway;
use crate::routes::{flash, index_location, redirect, render_index};
use crate::services::ServiceError;
use crate::services::main as main_service;
use crate::services::supplier::{self as supplier_service, submit_failure_notification};

#[get("/supplier/{supplier_id}")]
pub async fn show_supplier(
    supplier_id: web::Path<i64>,
    query: web::Query<IndexQuery>,
    gateway: web::Data<HttpSupplierGateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    let page = query.page();

    let form = match supplier_service::load_supplier_form(
        gateway.get_ref(),
        supplier_id.into_inner(),
        page,
    )
    .await
    {
        Ok(form) => form,
        Err(err) => {
            flash(&Notification::error(
                "Fornecedor",
                format!("Motivo: {}", err.reason()),
            ));
            return redirect(&index_location(page));
        }
    };

    let dialog = DialogState::new(form, FieldErrors::new());
    let data = main_service::load_index_page(gateway.get_ref(), query, Some(dialog), None).await;

    render_index(&tera, &flash_messages, &data)
}

/// Creates or updates a supplier.
///
/// On success the dialog closes via a redirect to the refreshed page. On any
/// failure the page is rendered again with the dialog open and the submitted
/// values in place.
#[post("/supplier/save")]
pub async fn save_supplier(
    gateway: web::Data<HttpSupplierGateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<SupplierForm>,
) -> impl Responder {
    match supplier_service::submit_supplier(gateway.get_ref(), &form).await {
        Ok(outcome) => {
            flash(&outcome.notification());
            redirect(&index_location(outcome.refresh_page()))
        }
        Err(err) => {
            let query = IndexQuery {
                page: Some(form.current_page()),
            };
            let (errors, notification) = match err {
                ServiceError::Validation(errors) => (errors, None),
                err => (FieldErrors::new(), Some(submit_failure_notification(&err))),
            };
            let dialog = DialogState::new(form, errors);

            let data =
                main_service::load_index_page(gateway.get_ref(), query, Some(dialog), notification)
                    .await;

            render_index(&tera, &flash_messages, &data)
        }
    }
}

#[post("/supplier/{supplier_id}/delete")]
pub async fn delete_supplier(
    supplier_id: web::Path<i64>,
    gateway: web::Data<HttpSupplierGateway>,
    web::Form(query): web::Form<IndexQuery>,
) -> impl Responder {
    match supplier_service::delete_supplier(gateway.get_ref(), supplier_id.into_inner()).await {
        Ok(notification) => flash(&notification),
        Err(err) => flash(&supplier_service::delete_failure_notification(&err)),
    }

    redirect(&index_location(query.page()))
}

/// Imports suppliers from pasted JSON.
///
/// A failed import keeps the dialog open with the pasted text so it can be
/// corrected and sent again.
#[post("/supplier/import")]
pub async fn import_suppliers(
    gateway: web::Data<HttpSupplierGateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ImportSuppliersForm>,
) -> impl Responder {
    let page = form.page.filter(|page| *page > 0).unwrap_or(1);
    let json = form.json.clone();

    match supplier_service::import_suppliers(gateway.get_ref(), form).await {
        Ok(notification) => {
            flash(&notification);
            redirect(&index_location(page))
        }
        Err(notification) => {
            let query = IndexQuery { page: Some(page) };
            let dialog = DialogState::import_retry(page, json);

            let data = main_service::load_index_page(
                gateway.get_ref(),
                query,
                Some(dialog),
                Some(notification),
            )
            .await;

            render_index(&tera, &flash_messages, &data)
        }
    }
}
