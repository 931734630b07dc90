//! Collects the visible text of a site's relevant pages into one corpus.

use crate::discovery::LinkSet;
use crate::extractor::visible_text;
use crate::fetcher::{Fetcher, PageKind};
use std::fmt;
use tracing::{debug, instrument, warn};

/// Text of one page, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub url: String,
    pub text: String,
}

/// Sections in the order their URLs were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    sections: Vec<Section>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: impl Into<String>, text: impl Into<String>) {
        self.sections.push(Section {
            url: url.into(),
            text: text.into(),
        });
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// True when no page contributed; the rendered corpus is then "".
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "\n--- Content from {} ---\n{}", section.url, section.text)?;
        }
        Ok(())
    }
}

/// Fetch every URL in turn and append its visible text.
///
/// A page that fails to load, or answers with an error status, is left out;
/// its siblings are unaffected. An empty corpus is a valid result.
#[instrument(skip_all, fields(pages = urls.len()))]
pub async fn aggregate(urls: &LinkSet, fetcher: &dyn Fetcher) -> Corpus {
    let mut corpus = Corpus::new();

    for url in urls.iter() {
        match fetcher.fetch(url, PageKind::Content).await {
            Ok(response) if response.status.is_success() => {
                let text = visible_text(&response.body);
                debug!(%url, chars = text.len(), "collected page text");
                corpus.push(url, text);
            }
            Ok(response) => {
                warn!(%url, status = %response.status, "skipping page");
            }
            Err(e) => {
                warn!(%url, "skipping page: {}", e);
            }
        }
    }

    corpus
}
