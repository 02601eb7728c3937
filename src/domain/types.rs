//! Strongly-typed value objects used by the supplier domain.
//!
//! These wrappers enforce basic invariants (non-negative identifiers,
//! normalized email, trimmed text) so that once a value reaches the payload
//! sent to the backend it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Email shape accepted by the supplier form: `local@domain.tld` with a
/// 2 to 4 letter final label, case-insensitive.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").expect("email regex is valid")
});

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is negative.
    #[error("id must not be negative")]
    NegativeId,
    /// Provided identifier is not a number.
    #[error("id must be an integer")]
    MalformedId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided CNPJ failed the check digit validation.
    #[error("invalid cnpj")]
    InvalidCnpj,
}

/// Backend-assigned supplier identifier.
///
/// Zero is a valid identifier; only negative values are rejected.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SupplierId(i64);

impl SupplierId {
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeId)
        }
    }

    /// Returns the raw `i64` backing this identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for SupplierId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for SupplierId {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for SupplierId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| TypeConstraintError::MalformedId)?;
        Self::new(value)
    }
}

impl From<SupplierId> for i64 {
    fn from(value: SupplierId) -> Self {
        value.0
    }
}

/// Trimmed, lower-cased email matching [`EMAIL_REGEX`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SupplierEmail(String);

impl SupplierEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = email.into().trim().to_lowercase();
        if EMAIL_REGEX.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SupplierEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for SupplierEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SupplierEmail> for String {
    fn from(value: SupplierEmail) -> Self {
        value.0
    }
}

/// Trims whitespace and rejects empty inputs.
fn non_empty(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString)
    } else {
        Ok(trimmed.to_string())
    }
}

macro_rules! text_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                non_empty(value.into()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_newtype!(
    SupplierName,
    "Supplier display name enforcing trimmed, non-empty values."
);

text_newtype!(
    SupplierDescription,
    "Free-text supplier description, trimmed and non-empty. Sent to the backend verbatim."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_id_accepts_zero() {
        assert_eq!(SupplierId::new(0).map(SupplierId::get), Ok(0));
        assert_eq!(SupplierId::new(-1), Err(TypeConstraintError::NegativeId));
        assert_eq!("17".parse::<SupplierId>().map(i64::from), Ok(17));
        assert_eq!(
            "abc".parse::<SupplierId>(),
            Err(TypeConstraintError::MalformedId)
        );
    }

    #[test]
    fn email_is_normalized() {
        let email = SupplierEmail::new("  Contato@Fornecedor.COM.br ").unwrap();
        assert_eq!(email.as_str(), "contato@fornecedor.com.br");
    }

    #[test]
    fn email_rejects_bad_shapes() {
        for bad in ["bad", "a@b", "a@b.c", "a@b.toolong", "@b.com", "a b@c.com"] {
            assert_eq!(
                SupplierEmail::new(bad),
                Err(TypeConstraintError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(SupplierName::new("  ACME  ").unwrap().as_str(), "ACME");
        assert_eq!(
            SupplierName::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn description_keeps_markup_characters() {
        let description = SupplierDescription::new(" Parafusos & porcas < 10mm ").unwrap();
        assert_eq!(description.as_str(), "Parafusos & porcas < 10mm");

        assert_eq!(
            SupplierDescription::new(" \n "),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
