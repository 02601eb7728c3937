//! Domain values shared by the forms, gateway and services.

pub mod cnpj;
pub mod supplier;
pub mod types;
