use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};

use crate::domain::supplier::{Supplier, SupplierListing};
use crate::domain::types::SupplierId;
use crate::gateway::errors::{GatewayError, GatewayResult, first_error_message};
use crate::gateway::{SupplierReader, SupplierWriter};

const SUPPLIERS_PATH: &str = "/fornecedor";

/// [`SupplierReader`] and [`SupplierWriter`] over the backend REST API.
#[derive(Clone, Debug)]
pub struct HttpSupplierGateway {
    client: Client,
    base_url: String,
}

impl HttpSupplierGateway {
    /// Builds a gateway rooted at `base_url`, e.g. `http://localhost:8080/neostore/api`.
    pub fn new(base_url: impl Into<String>) -> GatewayResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn suppliers_url(&self) -> String {
        format!("{}{SUPPLIERS_PATH}", self.base_url)
    }

    fn supplier_url(&self, id: SupplierId) -> String {
        format!("{}{SUPPLIERS_PATH}/{id}", self.base_url)
    }

    /// Sends the request, turning non-2xx statuses into [`GatewayError::Rejected`].
    async fn send(request: RequestBuilder) -> GatewayResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Rejected {
            status: status.as_u16(),
            message: first_error_message(&body),
        })
    }
}

impl SupplierReader for HttpSupplierGateway {
    async fn get_supplier(&self, id: SupplierId) -> GatewayResult<Supplier> {
        let response = Self::send(self.client.get(self.supplier_url(id))).await?;
        Ok(response.json::<Supplier>().await?)
    }

    async fn list_suppliers(&self, page: usize) -> GatewayResult<SupplierListing> {
        let request = self
            .client
            .get(self.suppliers_url())
            .query(&[("page", page)]);
        let response = Self::send(request).await?;
        Ok(response.json::<SupplierListing>().await?)
    }
}

impl SupplierWriter for HttpSupplierGateway {
    async fn create_supplier(&self, supplier: &Supplier) -> GatewayResult<()> {
        Self::send(self.client.post(self.suppliers_url()).json(supplier)).await?;
        Ok(())
    }

    async fn create_suppliers_from_json(&self, json: &str) -> GatewayResult<()> {
        let url = format!("{}/from_json", self.suppliers_url());
        Self::send(self.client.post(url).body(json.to_owned())).await?;
        Ok(())
    }

    async fn update_supplier(&self, id: SupplierId, supplier: &Supplier) -> GatewayResult<()> {
        Self::send(self.client.put(self.supplier_url(id)).json(supplier)).await?;
        Ok(())
    }

    async fn delete_supplier(&self, id: SupplierId) -> GatewayResult<()> {
        Self::send(self.client.delete(self.supplier_url(id))).await?;
        Ok(())
    }
}
