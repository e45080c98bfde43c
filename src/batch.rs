use crate::{meta::PageResult, source::PageFetcher};
use tokio::task::JoinSet;

/// Runs one fetch per URL in parallel and keeps the caller's ordering.
#[derive(Clone)]
pub(crate) struct BatchCoordinator {
    fetcher: PageFetcher,
}

impl BatchCoordinator {
    pub(crate) fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    pub(crate) async fn process(&self, urls: Vec<String>) -> Vec<PageResult> {
        log::info!("Processing batch of {} urls", urls.len());

        let mut active_fetches = JoinSet::new();
        for (index, url) in urls.iter().cloned().enumerate() {
            let fetcher = self.fetcher.clone();
            active_fetches.spawn(async move {
                let result = fetcher.fetch(&url).await.unwrap_or_else(|error| {
                    log::warn!("Error fetching meta tags for {url}: {error}");
                    PageResult::failure(url, error)
                });

                (index, result)
            });
        }

        let mut slots = vec![None; urls.len()];
        while let Some(fetched) = active_fetches.join_next().await {
            match fetched {
                Ok((index, result)) => slots[index] = Some(result),
                Err(error) => log::error!("Fetch task did not complete: {error}"),
            }
        }

        urls.into_iter()
            .zip(slots)
            .map(|(url, slot)| {
                slot.unwrap_or_else(|| PageResult::failure(url, "fetch task did not complete"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::BatchCoordinator;
    use crate::{
        config::FetchOptions,
        source::{tests::StubSource, FetchCache, PageFetcher, RemoteSource},
    };
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn coordinator(source: StubSource) -> BatchCoordinator {
        BatchCoordinator::new(PageFetcher::new(source, FetchCache::default()))
    }

    #[tokio::test]
    async fn empty_batch() {
        let results = coordinator(StubSource::default()).process(vec![]).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn preserves_order_and_length() {
        let mut source = StubSource::default();
        let urls: Vec<String> = (0..16).map(|i| format!("https://page{i}.test/")).collect();
        for (i, url) in urls.iter().enumerate() {
            source = source.with_page(url, &format!(r#"<meta name="description" content="page {i}">"#));
        }

        let results = coordinator(source).process(urls.clone()).await;

        assert_eq!(results.len(), urls.len());
        for (i, (result, url)) in results.iter().zip(&urls).enumerate() {
            assert_eq!(&result.url, url);
            assert_eq!(result.data.description, format!("page {i}"));
        }
    }

    #[tokio::test]
    async fn duplicate_urls_get_own_slots() {
        let url = "https://same.test/";
        let source = StubSource::default().with_page(url, r#"<meta property="og:title" content="Same">"#);

        let results = coordinator(source.clone())
            .process(vec![url.to_string(), url.to_string(), url.to_string()])
            .await;

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|result| result.url == url && result.is_success()));
        assert!(source.requests() >= 1);
    }

    #[tokio::test]
    async fn failure_does_not_abort_batch() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<head><meta name="description" content="Reachable"><meta property="og:title" content="Hello"></head>"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = PageFetcher::new(
            RemoteSource::new(&FetchOptions::default()).unwrap(),
            FetchCache::default(),
        );
        let urls = vec![
            format!("{}/ok", mock_server.uri()),
            "http://127.0.0.1:1/unreachable".to_string(),
        ];

        let results = BatchCoordinator::new(fetcher).process(urls.clone()).await;

        assert_eq!(results.len(), 2);

        assert_eq!(results[0].url, urls[0]);
        assert_eq!(results[0].error, None);
        assert_eq!(results[0].data.description, "Reachable");
        assert_eq!(results[0].data.og_tags["ogTitle"], "Hello");

        assert_eq!(results[1].url, urls[1]);
        assert!(results[1].error.as_ref().is_some_and(|error| !error.is_empty()));
        assert!(results[1].data.description.is_empty());
        assert!(results[1].data.og_tags.is_empty());
    }

    #[tokio::test]
    async fn second_batch_served_from_cache() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"<meta property="og:type" content="website">"#))
            .expect(2)
            .mount(&mock_server)
            .await;

        let fetcher = PageFetcher::new(
            RemoteSource::new(&FetchOptions::default()).unwrap(),
            FetchCache::default(),
        );
        let coordinator = BatchCoordinator::new(fetcher);
        let urls = vec![mock_server.uri()];

        for _ in 0..3 {
            let results = coordinator.process(urls.clone()).await;
            assert_eq!(results[0].data.og_tags["ogType"], "website");
        }
    }
}
