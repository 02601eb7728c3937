//! Remote supplier gateway: the REST backend as seen by the services.
//!
//! Each operation issues exactly one HTTP request. There are no retries, no
//! timeouts and no caching; failures reach the caller unmodified.
#![allow(async_fn_in_trait)]

use crate::domain::supplier::{Supplier, SupplierListing};
use crate::domain::types::SupplierId;
use crate::gateway::errors::GatewayResult;

pub mod errors;
pub mod http;

pub use http::HttpSupplierGateway;

pub trait SupplierReader {
    async fn get_supplier(&self, id: SupplierId) -> GatewayResult<Supplier>;
    /// Fetches the 1-indexed `page` of suppliers.
    async fn list_suppliers(&self, page: usize) -> GatewayResult<SupplierListing>;
}

pub trait SupplierWriter {
    async fn create_supplier(&self, supplier: &Supplier) -> GatewayResult<()>;
    /// Forwards raw JSON text holding an array of supplier objects.
    async fn create_suppliers_from_json(&self, json: &str) -> GatewayResult<()>;
    async fn update_supplier(&self, id: SupplierId, supplier: &Supplier) -> GatewayResult<()>;
    async fn delete_supplier(&self, id: SupplierId) -> GatewayResult<()>;
}
