use crate::meta::PageResult;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

pub(crate) const DEFAULT_INVALIDATE_AFTER: u32 = 2;

#[derive(Debug)]
struct CacheEntry {
    result: PageResult,
    access_count: u32,
}

#[derive(Debug)]
pub(crate) enum Lookup {
    Hit(PageResult),
    Miss,
}

/// Page results keyed by the literal URL string.
///
/// A stored entry is served while its access counter is below
/// `invalidate_after`. The lookup that brings the counter up to the limit
/// drops the entry, so the next one has to fetch again.
#[derive(Clone)]
pub(crate) struct Cache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    invalidate_after: u32,
}

impl Cache {
    pub(crate) fn new(invalidate_after: u32) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            invalidate_after,
        }
    }

    pub(crate) async fn get_or_mark(&self, url: &str) -> Lookup {
        let mut entries = self.entries.lock().await;
        let Some(entry) = entries.get_mut(url) else {
            return Lookup::Miss;
        };

        let servable = entry.access_count < self.invalidate_after;
        entry.access_count += 1;
        if entry.access_count < self.invalidate_after {
            return Lookup::Hit(entry.result.clone());
        }

        let entry = entries.remove(url);
        match entry {
            Some(entry) if servable => Lookup::Hit(entry.result),
            _ => Lookup::Miss,
        }
    }

    pub(crate) async fn put(&self, url: impl Into<String>, result: PageResult) {
        let mut entries = self.entries.lock().await;
        entries.insert(
            url.into(),
            CacheEntry {
                result,
                access_count: 1,
            },
        );
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn access_count(&self, url: &str) -> Option<u32> {
        let entries = self.entries.lock().await;
        entries.get(url).map(|entry| entry.access_count)
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new(DEFAULT_INVALIDATE_AFTER)
    }
}
