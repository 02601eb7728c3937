//! Runtime models that are not part of the supplier domain.

pub mod config;
