//! Best-effort recovery of a JSON object from free-form model output.
//!
//! Takes the span from the first `{` to the last `}` and parses it. This
//! tolerates prose and markdown fences around the object, but not two
//! separate objects or stray braces outside it; the model's JSON output
//! mode is the first line of defence against those.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecoveryError {
    #[error("no brace-delimited span in response")]
    NoSpan,

    #[error("span is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// First `{` through last `}`, inclusive.
pub fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

pub fn recover_object(text: &str) -> Result<Map<String, Value>, RecoveryError> {
    let span = brace_span(text).ok_or(RecoveryError::NoSpan)?;
    // A span opening with '{' can only parse to an object.
    let object: Map<String, Value> = serde_json::from_str(span)?;
    Ok(object)
}


#[cfg(all(test, feature = "fuzz"))]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn recovery_never_panics(text in "\\PC*") {
            let _ = recover_object(&text);
        }

        #[test]
        fn object_survives_surrounding_prose(
            prefix in "[^{}]*",
            suffix in "[^{}]*",
            value in "[a-zA-Z0-9 ]*",
        ) {
            let text = format!("{prefix}{{\"founded\": \"{value}\"}}{suffix}");
            let object = recover_object(&text).unwrap();
            prop_assert_eq!(object["founded"].as_str(), Some(value.as_str()));
        }
    }
}
