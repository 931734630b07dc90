pub mod client;
pub mod decode;
pub mod errors;
pub mod render;
pub mod types;

pub use client::HttpFetcher;
pub use errors::FetchError;
pub use render::BrowserFetcher;
pub use types::{PageKind, PageResponse};

use async_trait::async_trait;

/// The fetch capability: turn a URL into a document or a transport failure.
///
/// A non-success status is not an error at this level; callers decide what
/// a 403 or a 404 means for them.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, kind: PageKind) -> Result<PageResponse, FetchError>;
}
