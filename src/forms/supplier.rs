use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::cnpj::{Cnpj, is_valid_cnpj};
use crate::domain::supplier::{FormMode, Supplier, SupplierPayload};
use crate::domain::types::{
    EMAIL_REGEX, SupplierDescription, SupplierEmail, SupplierId, SupplierName,
};
use crate::forms::{FieldErrors, FormError, field_messages};

pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const EMAIL_REQUIRED: &str = "E-mail é obrigatório";
pub const EMAIL_INVALID: &str = "Endereço de e-mail inválido. Exemplo: exemplo@email.com";
pub const DESCRIPTION_REQUIRED: &str = "Descrição é obrigatória";
pub const CNPJ_REQUIRED: &str = "CNPJ é obrigatório";
pub const CNPJ_INVALID: &str = "CNPJ inválido. Exemplo: 65.832.247/0001-10";

const MODE_CREATE: &str = "create";
const MODE_EDIT: &str = "edit";

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(field_error("required", NAME_REQUIRED));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(field_error("required", EMAIL_REQUIRED));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(field_error("email", EMAIL_INVALID));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(field_error("required", DESCRIPTION_REQUIRED));
    }
    Ok(())
}

fn validate_cnpj(cnpj: &str) -> Result<(), ValidationError> {
    if cnpj.trim().is_empty() {
        return Err(field_error("required", CNPJ_REQUIRED));
    }
    if !is_valid_cnpj(cnpj) {
        return Err(field_error("cnpj", CNPJ_INVALID));
    }
    Ok(())
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Manual supplier form, used both to create and to edit a supplier.
pub struct SupplierForm {
    /// `create` or `edit`; missing means create.
    #[serde(default)]
    pub mode: Option<String>,
    /// Identifier of the edited supplier, only meaningful in edit mode.
    #[serde(default)]
    pub id: Option<String>,
    /// 1-indexed list page the dialog was opened from.
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "validate_description"))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "validate_cnpj"))]
    pub cnpj: String,
}

impl SupplierForm {
    /// Empty form opened by the "new supplier" button.
    pub fn create(page: usize) -> Self {
        Self {
            mode: Some(MODE_CREATE.to_string()),
            page: Some(page),
            ..Self::default()
        }
    }

    /// Form pre-filled with an existing record.
    pub fn edit(supplier: &Supplier, page: usize) -> Self {
        Self {
            mode: Some(MODE_EDIT.to_string()),
            id: supplier.id.map(|id| id.to_string()),
            page: Some(page),
            name: supplier.name.clone(),
            email: supplier.email.clone(),
            description: supplier.description.clone(),
            cnpj: supplier.cnpj.clone(),
        }
    }

    /// Runs every field rule and returns one message per failing field.
    pub fn validation_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => field_messages(&errors),
        }
    }

    /// Resolves the explicit mode flag. Edit mode requires a parseable id.
    pub fn mode(&self) -> Result<FormMode, FormError> {
        match self.mode_flag() {
            None | Some("") | Some(MODE_CREATE) => Ok(FormMode::Create),
            Some(MODE_EDIT) => {
                let id = self
                    .id
                    .as_deref()
                    .ok_or(FormError::InvalidSupplierId)?
                    .parse::<SupplierId>()
                    .map_err(|_| FormError::InvalidSupplierId)?;
                Ok(FormMode::Edit(id))
            }
            Some(_) => Err(FormError::InvalidMode),
        }
    }

    /// Whether the dialog shows the edit variant. Reads the flag the same way
    /// [`SupplierForm::mode`] does.
    pub fn is_edit(&self) -> bool {
        self.mode_flag() == Some(MODE_EDIT)
    }

    fn mode_flag(&self) -> Option<&str> {
        self.mode.as_deref().map(str::trim)
    }

    /// Page to come back to, never below 1.
    pub fn current_page(&self) -> usize {
        self.page.filter(|page| *page > 0).unwrap_or(1)
    }
}

impl TryFrom<&SupplierForm> for SupplierPayload {
    type Error = FormError;

    fn try_from(form: &SupplierForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: SupplierName::new(form.name.as_str()).map_err(|_| FormError::InvalidName)?,
            email: SupplierEmail::new(form.email.as_str()).map_err(|_| FormError::InvalidEmail)?,
            description: SupplierDescription::new(form.description.as_str())
                .map_err(|_| FormError::InvalidDescription)?,
            cnpj: Cnpj::new(&form.cnpj).map_err(|_| FormError::InvalidCnpj)?,
        })
    }
}
