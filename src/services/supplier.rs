//! Supplier form submission, deletion and bulk import workflows.

use crate::domain::supplier::{FormMode, SupplierPayload};
use crate::domain::types::SupplierId;
use crate::dto::main::Notification;
use crate::forms::import::{ImportSuppliersForm, ImportSuppliersPayload};
use crate::forms::supplier::SupplierForm;
use crate::gateway::{SupplierReader, SupplierWriter};
use crate::services::{ServiceError, ServiceResult};

/// Successful result of a supplier form submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new supplier was stored; new records surface on the first page.
    Created,
    /// An existing supplier was updated on the given page.
    Modified { page: usize },
}

impl SubmitOutcome {
    /// Page to reload after the dialog closes.
    pub fn refresh_page(&self) -> usize {
        match self {
            SubmitOutcome::Created => 1,
            SubmitOutcome::Modified { page } => *page,
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Created => Notification::success(
                "Cadastrado",
                "Fornecedor(res) cadastrado(os) com sucesso!",
            ),
            SubmitOutcome::Modified { .. } => {
                Notification::success("Modificado", "Fornecedor modificado com sucesso!")
            }
        }
    }
}

/// Notification shown when a create or update is refused.
pub fn submit_failure_notification(err: &ServiceError) -> Notification {
    Notification::error(
        "Falha ao cadastrar o fornecedor",
        format!("Motivo: {}", err.reason()),
    )
}

/// Loads one supplier and turns it into a pre-filled edit form.
pub async fn load_supplier_form<R>(gateway: &R, id: i64, page: usize) -> ServiceResult<SupplierForm>
where
    R: SupplierReader + ?Sized,
{
    let id = SupplierId::new(id)?;

    let mut supplier = gateway.get_supplier(id).await.map_err(|err| {
        log::error!("Failed to load supplier {id}: {err}");
        match err.status() {
            Some(404) => ServiceError::NotFound,
            _ => ServiceError::from(err),
        }
    })?;

    // The path is authoritative when the body omits the identifier.
    supplier.id.get_or_insert(id);

    Ok(SupplierForm::edit(&supplier, page))
}

/// Validates the form and creates or updates the supplier.
///
/// Validation failures return [`ServiceError::Validation`] without any
/// network call. The form itself is never modified, so callers can render
/// it again for a retry.
pub async fn submit_supplier<W>(gateway: &W, form: &SupplierForm) -> ServiceResult<SubmitOutcome>
where
    W: SupplierWriter + ?Sized,
{
    let errors = form.validation_errors();
    if !errors.is_empty() {
        log::error!("Failed to validate supplier form: {errors:?}");
        return Err(ServiceError::Validation(errors));
    }

    let mode = form.mode()?;
    let payload = SupplierPayload::try_from(form)?;
    let supplier = payload.into_supplier(mode.supplier_id());

    match mode {
        FormMode::Edit(id) => {
            gateway
                .update_supplier(id, &supplier)
                .await
                .map_err(|err| {
                    log::error!("Failed to update supplier {id}: {err}");
                    err
                })?;
            Ok(SubmitOutcome::Modified {
                page: form.current_page(),
            })
        }
        FormMode::Create => {
            gateway.create_supplier(&supplier).await.map_err(|err| {
                log::error!("Failed to create supplier: {err}");
                err
            })?;
            Ok(SubmitOutcome::Created)
        }
    }
}

/// Deletes the supplier with the given identifier.
pub async fn delete_supplier<W>(gateway: &W, id: i64) -> ServiceResult<Notification>
where
    W: SupplierWriter + ?Sized,
{
    let id = SupplierId::new(id)?;

    gateway.delete_supplier(id).await.map_err(|err| {
        log::error!("Failed to delete supplier {id}: {err}");
        err
    })?;

    Ok(Notification::success(
        "Deletado",
        "Fornecedor deletado com sucesso!",
    ))
}

/// Notification shown when a deletion is refused.
pub fn delete_failure_notification(err: &ServiceError) -> Notification {
    Notification::error(
        "Falha ao deletar o fornecedor",
        format!("Motivo: {}", err.reason()),
    )
}

/// Checks the pasted JSON and forwards it to the backend bulk endpoint.
///
/// Every failure maps to a notification; the backend's per-record errors
/// are not surfaced.
pub async fn import_suppliers<W>(
    gateway: &W,
    form: ImportSuppliersForm,
) -> Result<Notification, Notification>
where
    W: SupplierWriter + ?Sized,
{
    let payload = ImportSuppliersPayload::try_from(form).map_err(|err| {
        log::error!("Rejected supplier import payload: {err}");
        Notification::error("Importar de JSON", "JSON não preenchido ou mal formatado")
    })?;

    gateway
        .create_suppliers_from_json(&payload.json)
        .await
        .map_err(|err| {
            log::error!("Failed to import {} suppliers: {err}", payload.count);
            Notification::error("Falha ao importar de JSON", "Ocorreram erros na importação")
        })?;

    Ok(Notification::success(
        "Cadastrado",
        "Fornecedor(res) cadastrado(os) com sucesso!",
    ))
}
