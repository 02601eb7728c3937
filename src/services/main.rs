//! List/pagination workflow for the supplier index page.

use crate::dto::main::{DialogState, IndexPageData, IndexQuery, Notification, SupplierPage};
use crate::gateway::SupplierReader;
use crate::pagination::Paginated;
use crate::services::ServiceResult;

/// Fetches one page of suppliers.
///
/// Missing `records` or `total_records` in the backend body mean an empty
/// page, not an error. Page `0` is treated as the first page.
pub async fn load_page<R>(gateway: &R, page: usize) -> ServiceResult<SupplierPage>
where
    R: SupplierReader + ?Sized,
{
    let page = page.max(1);

    let listing = gateway.list_suppliers(page).await.map_err(|err| {
        log::error!("Failed to list suppliers on page {page}: {err}");
        err
    })?;

    let records = listing.records.unwrap_or_default();
    let total_records = listing.total_records.unwrap_or(0);

    Ok(Paginated::new(records, page, total_records))
}

/// Loads the index page, optionally with the supplier dialog open.
///
/// A failed fetch still renders the page: the table is left empty and the
/// failure is reported through the page notification.
pub async fn load_index_page<R>(
    gateway: &R,
    query: IndexQuery,
    dialog: Option<DialogState>,
    notification: Option<Notification>,
) -> IndexPageData
where
    R: SupplierReader + ?Sized,
{
    let page = query.page();

    match load_page(gateway, page).await {
        Ok(suppliers) => IndexPageData {
            suppliers,
            dialog,
            notification,
        },
        Err(err) => IndexPageData {
            suppliers: Paginated::new(Vec::new(), page, 0),
            dialog,
            notification: notification.or_else(|| {
                Some(Notification::error(
                    "Falha ao carregar fornecedores",
                    format!("Motivo: {}", err.reason()),
                ))
            }),
        },
    }
}
