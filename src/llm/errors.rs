use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("request to completion API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion API returned no text")]
    EmptyResponse,

    #[error("prompt was blocked by the model: {0}")]
    Blocked(String),

    #[error("unexpected completion payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
