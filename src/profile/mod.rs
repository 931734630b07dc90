//! Structured extraction: corpus in, company profile fields out.
//!
//! Failure never leaves this module as an error. Depending on
//! [`FailureStyle`] it becomes either an empty [`Details`] or a single
//! `error` field.

pub mod prompt;
pub mod recover;

pub use prompt::ExtractionPrompt;
pub use recover::{RecoveryError, brace_span, recover_object};

use crate::aggregate::Corpus;
use crate::config::FailureStyle;
use crate::dataset::Details;
use crate::llm::Completion;
use tracing::{debug, instrument, warn};

pub const NO_CONTENT_MESSAGE: &str = "No content available";
pub const COMPLETION_FAILED_MESSAGE: &str = "Gemini AI request failed";
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from AI";

fn failure(style: FailureStyle, message: &str) -> Details {
    match style {
        FailureStyle::Empty => Details::new(),
        FailureStyle::ErrorField => Details::error(message),
    }
}

/// Ask the model for the site's profile and recover whatever object it
/// returned. Keys pass through unvalidated. An empty corpus short-circuits
/// without calling the model.
#[instrument(skip_all, fields(site = %site, sections = corpus.len()))]
pub async fn extract(
    corpus: &Corpus,
    site: &str,
    completion: &dyn Completion,
    style: FailureStyle,
) -> Details {
    if corpus.is_empty() {
        debug!("empty corpus, skipping completion");
        return failure(style, NO_CONTENT_MESSAGE);
    }

    let corpus_text = corpus.to_string();
    let prompt = ExtractionPrompt::new(site, &corpus_text).to_string();

    let response = match completion.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("completion failed: {}", e);
            return failure(style, COMPLETION_FAILED_MESSAGE);
        }
    };

    match recover_object(&response) {
        Ok(object) => {
            let details = Details::from_json_object(object);
            debug!(fields = details.len(), "profile extracted");
            details
        }
        Err(e) => {
            warn!("could not recover JSON from completion: {}", e);
            failure(style, INVALID_RESPONSE_MESSAGE)
        }
    }
}
