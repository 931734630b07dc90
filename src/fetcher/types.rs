use reqwest::StatusCode;
use url::Url;

/// Which step of the per-site pipeline a fetch serves.
///
/// Static HTTP ignores it. The browser fetcher settles after a seed
/// navigation and scrolls content pages to trigger lazy loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Seed,
    Content,
}

/// A fetched document. Non-success statuses are kept as data so callers can
/// inspect the body of a 403/429 response.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body: String,
    /// Label of the encoding the body was decoded from, e.g. `UTF-8`.
    pub encoding: &'static str,
}

impl PageResponse {
    pub fn new(url_final: Url, status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            url_final,
            status,
            body: body.into(),
            encoding: "UTF-8",
        }
    }
}
