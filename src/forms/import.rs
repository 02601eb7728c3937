//! Bulk supplier import from pasted JSON.

use serde::Deserialize;
use serde_json::Value;

use crate::forms::FormError;

/// Form carrying the JSON textarea content.
#[derive(Debug, Default, Deserialize)]
pub struct ImportSuppliersForm {
    #[serde(default)]
    pub json: String,
    #[serde(default)]
    pub page: Option<usize>,
}

/// Checked import payload. The pasted text is forwarded to the backend as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSuppliersPayload {
    pub json: String,
    pub count: usize,
}

impl TryFrom<ImportSuppliersForm> for ImportSuppliersPayload {
    type Error = FormError;

    fn try_from(form: ImportSuppliersForm) -> Result<Self, Self::Error> {
        if form.json.trim().is_empty() {
            return Err(FormError::EmptyImport);
        }

        let value: Value = serde_json::from_str(&form.json)
            .map_err(|err| FormError::MalformedImport(err.to_string()))?;

        let records = value
            .as_array()
            .ok_or_else(|| FormError::MalformedImport("expected a JSON array".to_string()))?;

        if records.is_empty() {
            return Err(FormError::EmptyImport);
        }

        if let Some(position) = records.iter().position(|record| !record.is_object()) {
            return Err(FormError::MalformedImport(format!(
                "item {position} is not an object"
            )));
        }

        Ok(Self {
            count: records.len(),
            json: form.json,
        })
    }
}
