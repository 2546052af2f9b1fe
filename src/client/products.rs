//! client extensions for fetching the product catalog
use {
    crate::{
        client::{CatalogClient, CatalogSource},
        error::{Result, ShopError},
        models::Product,
    },
    async_trait::async_trait,
    tracing::{debug, instrument, warn},
};

/// the message shown when the catalog answers with a non-success status
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products";

impl CatalogClient {
    /// fetch the whole catalog with a single GET
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn get_products(&self) -> Result<Vec<Product>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ShopError::FetchFailed(format!("network error: {}", e)))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "catalog request failed");
            return Err(ShopError::FetchFailed(FETCH_FAILED_MESSAGE.to_string()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ShopError::FetchFailed(format!("network error: {}", e)))?;
        let products: Vec<Product> =
            serde_json::from_slice(&bytes).map_err(|e| ShopError::ParseFailed(e.to_string()))?;

        debug!(count = products.len(), "fetched products");
        Ok(products)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        self.get_products().await
    }
}
