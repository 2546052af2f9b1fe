//! the product loader, a one-shot fetch bound to the lifetime of the home page
use {
    crate::{client::CatalogSource, models::Product},
    std::{sync::Arc, time::Duration},
    tokio::sync::watch,
    tokio_util::sync::CancellationToken,
    tracing::{debug, warn},
};

/// the state of a fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// the request hasn't settled yet
    Pending,
    /// the request succeeded
    Succeeded(Vec<T>),
    /// the request failed, with a short message for the user
    Failed(String),
}

impl<T> FetchState<T> {
    /// whether the request is still in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// whether the request reached a terminal state
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// the fetched items, if the request succeeded
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::Succeeded(items) => Some(items),
            _ => None,
        }
    }

    /// the failure message, if the request failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Pending
    }
}

/// fetch the catalog once and fold the outcome into a terminal [`FetchState`]
pub async fn load(source: &dyn CatalogSource) -> FetchState<Product> {
    match source.fetch_products().await {
        Ok(products) => {
            debug!(count = products.len(), "products loaded");
            FetchState::Succeeded(products)
        }
        Err(e) => {
            warn!(error = %e, "failed to load products");
            FetchState::Failed(e.to_string())
        }
    }
}

/// a running product fetch
///
/// the fetch is cancelled when the loader is dropped, and a response that arrives
/// after that is thrown away
#[derive(Debug)]
pub struct ProductLoader {
    /// the published state
    state: watch::Receiver<FetchState<Product>>,
    /// fired on teardown
    cancel: CancellationToken,
}

impl ProductLoader {
    /// start fetching from `source` on the current tokio runtime
    pub fn activate(source: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = watch::channel(FetchState::Pending);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => {
                    debug!("product fetch cancelled");
                    return;
                }
                outcome = load(source.as_ref()) => outcome,
            };

            tx.send_if_modified(|current| {
                if token.is_cancelled() || current.is_settled() {
                    return false;
                }

                *current = outcome;
                true
            });
        });

        debug!("product loader activated");

        Self { state: rx, cancel }
    }

    /// the current state
    pub fn state(&self) -> FetchState<Product> {
        self.state.borrow().clone()
    }

    /// wait until the fetch settles, returns the current (pending) state if it was cancelled first
    pub async fn wait_settled(&self) -> FetchState<Product> {
        let mut rx = self.state.clone();

        match rx.wait_for(FetchState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }

    /// like [`Self::wait_settled`], but give up after `limit`
    pub async fn wait_settled_for(&self, limit: Duration) -> FetchState<Product> {
        tokio::time::timeout(limit, self.wait_settled())
            .await
            .unwrap_or_else(|_| self.state())
    }

    /// stop the fetch, the state stays whatever it was
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// whether the loader was torn down
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ProductLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            client::{CatalogClient, testing},
            error::{Result, ShopError},
            models::Rating,
        },
        async_trait::async_trait,
        std::sync::atomic::{AtomicUsize, Ordering},
        tokio::sync::Notify,
    };

    fn product(id: i64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 1.0,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: Rating { rate: 4.0, count: 1 },
        }
    }

    /// a source that answers once `release` is notified
    #[derive(Default)]
    struct GatedSource {
        release: Notify,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogSource for GatedSource {
        async fn fetch_products(&self) -> Result<Vec<Product>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(vec![product(1, "late")])
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch_products(&self) -> Result<Vec<Product>> {
            Err(ShopError::FetchFailed("Failed to fetch products".into()))
        }
    }

    #[tokio::test]
    async fn test_load_folds_errors_into_failed() {
        let state = load(&FailingSource).await;

        assert_eq!(state, FetchState::Failed("Failed to fetch products".into()));
        assert!(state.items().is_none());
    }

    #[tokio::test]
    async fn test_starts_pending_then_settles_once() {
        let source = Arc::new(GatedSource::default());
        let loader = ProductLoader::activate(source.clone());

        assert!(loader.state().is_pending());

        source.release.notify_one();
        let settled = loader.wait_settled().await;

        assert_eq!(settled.items().map(<[Product]>::len), Some(1));
        assert!(settled.error().is_none());

        tokio::task::yield_now().await;
        assert_eq!(loader.state(), settled);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancelled_loader_never_applies_the_response() {
        let source = Arc::new(GatedSource::default());
        let loader = ProductLoader::activate(source.clone());

        loader.cancel();
        source.release.notify_one();

        let state = loader.wait_settled_for(Duration::from_millis(200)).await;

        assert!(state.is_pending());
        assert!(loader.is_cancelled());
    }

    #[tokio::test]
    async fn test_drop_cancels_the_fetch() {
        let source = Arc::new(GatedSource::default());
        let loader = ProductLoader::activate(source.clone());
        let mut rx = loader.state.clone();

        drop(loader);
        source.release.notify_one();

        // the task exits without publishing, closing the channel
        assert!(rx.changed().await.is_err());
        assert!(rx.borrow().is_pending());
    }

    #[tokio::test]
    async fn test_remount_fetches_again() {
        let source = Arc::new(GatedSource::default());

        let first = ProductLoader::activate(source.clone());
        source.release.notify_one();
        assert!(first.wait_settled().await.is_settled());
        drop(first);

        let second = ProductLoader::activate(source.clone());
        assert!(second.state().is_pending());

        source.release.notify_one();
        let state = second.wait_settled().await;

        assert_eq!(state.items().map(<[Product]>::len), Some(1));
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_partial_records_settle_succeeded() {
        let body = r#"[{"id":1,"title":"A","price":9.99,"description":"d","category":"c","image":"u","rating":{"rate":4.5,"count":3}},{"id":2,"title":"B","price":5}]"#;
        let url = testing::serve("200 OK", body.to_string()).await;
        let client = CatalogClient::new(url, &Default::default()).unwrap();

        let state = load(&client).await;
        let items = state.items().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "B");
        assert_eq!(items[1].description, "");
        assert_eq!(items[1].rating, Rating::default());
    }

    #[tokio::test]
    async fn test_wait_settled_for_times_out_pending() {
        let loader = ProductLoader::activate(Arc::new(GatedSource::default()));
        let state = loader.wait_settled_for(Duration::from_millis(20)).await;

        assert!(state.is_pending());
        assert!(!loader.is_cancelled());
    }

    #[tokio::test]
    async fn test_settles_from_http() {
        let url = testing::serve("200 OK", testing::one_product_body()).await;
        let client = CatalogClient::new(url, &Default::default()).unwrap();
        let loader = ProductLoader::activate(Arc::new(client));

        let state = loader.wait_settled().await;

        assert_eq!(state.items().unwrap()[0].title, "A");
    }

    #[tokio::test]
    async fn test_server_error_settles_failed() {
        let url = testing::serve("500 Internal Server Error", String::new()).await;
        let client = CatalogClient::new(url, &Default::default()).unwrap();
        let loader = ProductLoader::activate(Arc::new(client));

        let state = loader.wait_settled().await;

        assert_eq!(state.error(), Some("Failed to fetch products"));
    }
}
