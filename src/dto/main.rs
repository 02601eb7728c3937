use serde::{Deserialize, Serialize};

use crate::domain::supplier::Supplier;
use crate::forms::FieldErrors;
use crate::forms::supplier::SupplierForm;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// 1-indexed page requested by the paginator.
    pub page: Option<usize>,
}

impl IndexQuery {
    pub fn page(&self) -> usize {
        self.page.filter(|page| *page > 0).unwrap_or(1)
    }
}

/// One loaded page of suppliers.
pub type SupplierPage = Paginated<Supplier>;

/// Severity of a toast-style notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// User-facing notification with a short summary and a detail line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub summary: &'static str,
    pub detail: String,
}

impl Notification {
    pub fn success(summary: &'static str, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            summary,
            detail: detail.into(),
        }
    }

    pub fn error(summary: &'static str, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary,
            detail: detail.into(),
        }
    }

    /// Single-line rendering used for flash messages.
    pub fn message(&self) -> String {
        format!("{}: {}", self.summary, self.detail)
    }
}

/// State of the supplier dialog. Its presence means the dialog is visible.
#[derive(Clone, Debug, Serialize)]
pub struct DialogState {
    pub form: SupplierForm,
    pub errors: FieldErrors,
    pub edit_mode: bool,
    /// The JSON import tab is only offered when creating.
    pub import_enabled: bool,
    /// Text refilled into the import tab after a failed import.
    pub import_json: String,
}

impl DialogState {
    pub fn new(form: SupplierForm, errors: FieldErrors) -> Self {
        let edit_mode = form.is_edit();
        Self {
            form,
            errors,
            edit_mode,
            import_enabled: !edit_mode,
            import_json: String::new(),
        }
    }

    /// Create dialog reopened on the import tab with the pasted text kept.
    pub fn import_retry(page: usize, json: String) -> Self {
        Self {
            import_json: json,
            ..Self::new(SupplierForm::create(page), FieldErrors::new())
        }
    }
}

/// Data required to render the main index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    pub suppliers: SupplierPage,
    pub dialog: Option<DialogState>,
    pub notification: Option<Notification>,
}
