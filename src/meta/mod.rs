mod extractor;
mod key;

use self::{extractor::extract, key::normalize};
use scraper::Html;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PageData {
    pub(crate) description: String,
    #[serde(rename = "ogTags")]
    pub(crate) og_tags: BTreeMap<String, String>,
}

/// Outcome for a single requested URL.
///
/// Exactly one of `data` (populated) and `error` (set) carries information;
/// a failed URL keeps an empty `data` so the wire shape never changes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageResult {
    pub(crate) url: String,
    pub(crate) data: PageData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl PageResult {
    pub(crate) fn success(url: impl Into<String>, data: PageData) -> Self {
        Self {
            url: url.into(),
            data,
            error: None,
        }
    }

    pub(crate) fn failure(url: impl Into<String>, error: impl ToString) -> Self {
        Self {
            url: url.into(),
            data: PageData::default(),
            error: Some(error.to_string()),
        }
    }

    pub(crate) fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Parses raw markup and extracts its metadata.
///
/// The parsed tree is not `Send`, so it never outlives this call.
pub(crate) fn parse(body: &str) -> PageData {
    let document = Html::parse_document(body);
    extract(&document)
}
