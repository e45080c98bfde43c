/// Per-URL failure. Its text ends up in the `error` field of the result.
#[derive(Debug, thiserror::Error)]
pub(crate) enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("cannot parse response body as html: {0}")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),
}
