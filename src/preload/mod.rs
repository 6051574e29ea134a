//! Best-effort image preloading.
//!
//! Before a board is marked ready every distinct image is pulled into the
//! runtime's cache, so the first flip of any card shows its face at once.
//! A failed image is logged and skipped; it will simply load lazily later.

use async_trait::async_trait;
use futures::future::join_all;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::error::PreloadError;

/// Runtime image cache.
#[async_trait]
pub trait ImageCache: Send + Sync {
    /// Fetch `url` into the cache.
    async fn load(&self, url: &str) -> Result<(), PreloadError>;

    /// Drop cached entries not in `urls`. Called with the working set of a
    /// new board before it is preloaded; caches without eviction ignore it.
    fn retain(&self, _urls: &[String]) {}
}

/// Outcome of a preload batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadReport {
    /// Distinct URLs attempted.
    pub requested: usize,
    /// URLs now in the cache.
    pub loaded: usize,
    /// URLs that failed, in request order.
    pub failed: Vec<String>,
}

impl PreloadReport {
    /// Did every image load?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Remove duplicate URLs, keeping first-occurrence order.
pub fn unique_images<I, S>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    urls.into_iter()
        .filter_map(|url| {
            let url = url.as_ref();
            seen.insert(url.to_string()).then(|| url.to_string())
        })
        .collect()
}

/// Load every distinct URL concurrently; resolves when all attempts finish.
pub async fn preload<C, I, S>(cache: &C, urls: I) -> PreloadReport
where
    C: ImageCache + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let urls = unique_images(urls);
    let results = join_all(urls.iter().map(|url| cache.load(url))).await;

    let mut report = PreloadReport {
        requested: urls.len(),
        ..PreloadReport::default()
    };
    for (url, result) in urls.into_iter().zip(results) {
        match result {
            Ok(()) => report.loaded += 1,
            Err(err) => {
                warn!(%err, "image preload failed");
                report.failed.push(url);
            }
        }
    }

    debug!(requested = report.requested, loaded = report.loaded, "preload finished");
    report
}
