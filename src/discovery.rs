//! One-hop link discovery from a seed page.

use crate::extractor::{extract_links, is_blocked};
use crate::fetcher::{FetchError, Fetcher, PageKind};
use crate::relevance::Keywords;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Why a seed produced no links at all.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Captcha, WAF interstitial, or an explicit 403/429.
    #[error("site blocked the fetcher (status {status})")]
    Blocked { status: u16 },

    #[error("seed fetch failed: {0}")]
    FetchFailed(#[from] FetchError),
}

/// Deduplicated absolute URLs, kept in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    urls: Vec<String>,
    seen: HashSet<String>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the URL was already present.
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.urls.push(url);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LinkSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = LinkSet::new();
        for url in iter {
            set.insert(url);
        }
        set
    }
}

/// Fetch `seed` and collect its relevant outgoing links.
///
/// Links resolve against the seed URL itself, not against any redirect
/// target. There is no recursion and no cap on the number of links.
#[instrument(skip_all, fields(seed = %seed))]
pub async fn discover_links(
    seed: &str,
    keywords: &Keywords,
    fetcher: &dyn Fetcher,
) -> Result<LinkSet, DiscoveryError> {
    let base = Url::parse(seed).map_err(FetchError::from)?;

    let response = match fetcher.fetch(seed, PageKind::Seed).await {
        Ok(response) => response,
        Err(e) => {
            if e.is_timeout() {
                warn!("seed fetch timed out");
            } else {
                warn!("seed fetch failed: {}", e);
            }
            return Err(DiscoveryError::FetchFailed(e));
        }
    };

    let status = response.status.as_u16();
    if is_blocked(&response.body, status) {
        warn!(status, "seed response looks like a block page");
        return Err(DiscoveryError::Blocked { status });
    }

    if !response.status.is_success() {
        warn!(status, "seed returned an error status");
        return Err(DiscoveryError::FetchFailed(FetchError::Http {
            status: response.status,
        }));
    }

    if response.url_final != base {
        debug!(final_url = %response.url_final, "seed redirected; resolving links against the seed");
    }

    let links: LinkSet = extract_links(&response.body, &base)
        .into_iter()
        .map(String::from)
        .filter(|url| keywords.is_relevant(url))
        .collect();

    for url in links.iter() {
        debug!(%url, "relevant link");
    }
    info!("found {} relevant links", links.len());

    Ok(links)
}
