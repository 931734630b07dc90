//! Configuration handling for the profiler.
//!
//! Runtime credentials come from the process environment (binaries load a
//! `.env` file first via `dotenvy`). Everything that controls pacing of a
//! run lives in [`PipelineConfig`] so tests can zero the delays out.

mod pipeline;

pub use pipeline::{FailureStyle, MergeMode, PipelineConfig};

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable names.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_API_BASE: &str = "GEMINI_API_BASE";
pub const ENV_OUTPUT: &str = "PROFILER_OUTPUT";

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Application runtime configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    model: String,
    api_base: String,
    output_path: Option<PathBuf>,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            output_path: None,
        }
    }

    /// Load from environment variables.
    ///
    /// The API key is mandatory: a missing or blank key aborts the run
    /// before any site is processed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_API_KEY))?;
        let model = env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_base = env::var(ENV_API_BASE).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        if url::Url::parse(&api_base).is_err() {
            return Err(ConfigError::InvalidValue {
                field: ENV_API_BASE,
                reason: format!("'{}' is not an absolute URL", api_base),
            });
        }

        let output_path = env::var(ENV_OUTPUT).ok().map(PathBuf::from);

        Ok(Self {
            api_key,
            model,
            api_base,
            output_path,
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Secret used to authenticate against the completion API.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
    /// Generative model name, e.g. `gemini-1.5-flash`.
    pub fn model(&self) -> &str {
        &self.model
    }
    /// Scheme and host of the completion API.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
    /// Output file override; binaries fall back to their own default name.
    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output_path.as_ref()
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("output_path", &self.output_path)
            .finish()
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A required variable is absent or blank.
    Missing(&'static str),
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(field) => {
                write!(f, "API key not found! Set {} in the environment or .env file", field)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
