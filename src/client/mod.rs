//! remote product catalog stuff
use {
    crate::{
        config::options::HttpConfig,
        error::{Result, ShopError},
        getopt,
        models::Product,
    },
    async_trait::async_trait,
    reqwest::Client,
    std::time::Duration,
    tracing::info,
};

pub mod products;

/// something that can produce the full product catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// fetch every product
    ///
    /// # Errors
    ///
    /// returns [`ShopError::FetchFailed`] if the catalog couldn't be fetched  
    /// returns [`ShopError::ParseFailed`] if the response wasn't a list of products
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

/// the catalog client
#[derive(Clone, Debug)]
pub struct CatalogClient {
    /// the http client
    pub client: Client,
    /// the catalog endpoint
    pub url: String,
}

impl CatalogClient {
    /// make a client for `url` using the given http settings
    pub fn new(url: impl Into<String>, http: &HttpConfig) -> Result<Self> {
        let client = Self::build_http_client(http)?;
        let url = url.into();

        info!(%url, "initialized catalog client");

        Ok(Self::with_client(client, url))
    }

    /// make a client from the loaded configuration
    pub fn from_config() -> Result<Self> {
        let url = getopt!(catalog.url);
        let http = getopt!(http);

        Self::new(url, &http)
    }

    /// make a client around an existing http client
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// build an http client based on the given settings
    fn build_http_client(http: &HttpConfig) -> Result<Client> {
        let defaults = HttpConfig::default();
        let user_agent = http
            .user_agent
            .clone()
            .or(defaults.user_agent)
            .unwrap_or_default();

        let mut client_builder = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(Duration::from_secs(
                http.connect_timeout_secs.unwrap_or(10),
            ))
            .pool_idle_timeout(Duration::from_secs(
                http.pool_idle_timeout_secs.unwrap_or(90),
            ));

        if let Some(secs) = http.timeout_secs.filter(|secs| *secs > 0) {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        client_builder
            .build()
            .map_err(|e| ShopError::FetchFailed(format!("failed to build http client: {}", e)))
    }
}
