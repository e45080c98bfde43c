mod cache;
mod error;
mod remote;

pub(crate) use self::{
    cache::{Cache as FetchCache, Lookup, DEFAULT_INVALIDATE_AFTER},
    error::FetchError,
    remote::RemoteSource,
};
use crate::meta::{self, PageResult};
use std::sync::Arc;

#[async_trait]
pub(crate) trait PageSource: Send + Sync {
    async fn fetch_raw(&self, url: &str) -> Result<String, FetchError>;
}

/// Resolves a single URL into its metadata, going through the cache first.
#[derive(Clone)]
pub(crate) struct PageFetcher {
    source: Arc<dyn PageSource>,
    cache: FetchCache,
}

impl PageFetcher {
    pub(crate) fn new(source: impl PageSource + 'static, cache: FetchCache) -> Self {
        Self {
            source: Arc::new(source),
            cache,
        }
    }

    pub(crate) async fn fetch(&self, url: &str) -> Result<PageResult, FetchError> {
        if let Lookup::Hit(result) = self.cache.get_or_mark(url).await {
            log::debug!("Serving {url} from cache");
            return Ok(result);
        }

        log::debug!("Fetching {url}");
        let body = self.source.fetch_raw(url).await?;
        let result = PageResult::success(url, meta::parse(&body));

        self.cache.put(url, result.clone()).await;
        Ok(result)
    }
}
