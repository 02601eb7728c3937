use serde::{Deserialize, Serialize};

use crate::domain::cnpj::Cnpj;
use crate::domain::types::{SupplierDescription, SupplierEmail, SupplierId, SupplierName};

/// Supplier record as exchanged with the backend.
///
/// The backend owns these records; the front-end only holds the copy returned
/// by the latest page fetch. Missing text fields decode as empty strings.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    /// Absent until the backend persists the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SupplierId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cnpj: String,
}

/// Raw page body returned by the backend list endpoint.
///
/// Both fields may be omitted (or `null`) by the backend.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SupplierListing {
    pub records: Option<Vec<Supplier>>,
    pub total_records: Option<usize>,
}

/// Whether the supplier form creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(SupplierId),
}

impl FormMode {
    /// Identifier of the record being edited, if any.
    pub fn supplier_id(&self) -> Option<SupplierId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

/// Validated supplier values ready to be sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplierPayload {
    pub name: SupplierName,
    pub email: SupplierEmail,
    pub description: SupplierDescription,
    pub cnpj: Cnpj,
}

impl SupplierPayload {
    /// Builds the wire record, carrying `id` when editing.
    pub fn into_supplier(self, id: Option<SupplierId>) -> Supplier {
        Supplier {
            id,
            name: self.name.into_inner(),
            email: self.email.into_inner(),
            description: self.description.into_inner(),
            cnpj: self.cnpj.into_inner(),
        }
    }
}
