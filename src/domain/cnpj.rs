//! Brazilian company tax identifier (CNPJ) checksum and value object.
//!
//! A CNPJ has 14 digits: 12 base digits followed by two mod-11 check digits.
//! Users usually type it with the `NN.NNN.NNN/NNNN-NN` punctuation, which is
//! ignored during validation and restored when the value is stored.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Keeps only the ASCII digits of `raw`, as numeric values.
fn digits_of(raw: &str) -> Vec<u32> {
    raw.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Computes a check digit over `digits` using the paired `weights`.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        remainder => 11 - remainder,
    }
}

/// Returns `true` when `raw` holds a CNPJ with valid check digits.
///
/// Non-digit characters are stripped first, so both `11.222.333/0001-81` and
/// `11222333000181` are accepted. Inputs whose 14 digits are all the same are
/// rejected even though some of them would satisfy the checksum.
pub fn is_valid_cnpj(raw: &str) -> bool {
    let digits = digits_of(raw);

    if digits.len() != CNPJ_LEN {
        return false;
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    if check_digit(&digits[..12], &FIRST_WEIGHTS) != digits[12] {
        return false;
    }

    check_digit(&digits[..13], &SECOND_WEIGHTS) == digits[13]
}

/// Validated CNPJ stored in its punctuated `NN.NNN.NNN/NNNN-NN` form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Validates the checksum and normalizes the punctuation.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.as_ref();
        if !is_valid_cnpj(raw) {
            return Err(TypeConstraintError::InvalidCnpj);
        }

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        Ok(Self(format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        )))
    }

    /// Borrow the punctuated value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 14 bare digits without punctuation.
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Cnpj {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cnpj> for String {
    fn from(value: Cnpj) -> Self {
        value.0
    }
}
