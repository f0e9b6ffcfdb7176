use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const SECRETS_PATH_VAR: &str = "RESUME_MATCHER_SECRETS";
pub const DEFAULT_SECRETS_PATH: &str = "secrets.toml";
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Configuration handed to the analysis pipeline.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub api_base: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Secrets {
    #[serde(alias = "GROQ_API_KEY")]
    groq_api_key: Option<String>,
    #[serde(alias = "GROQ_API_BASE")]
    groq_api_base: Option<String>,
}

impl Settings {
    /// Reads the secrets file (if any), falling back to the environment for the API key.
    pub fn load() -> Result<Self, ConfigError> {
        let secrets_path = std::env::var(SECRETS_PATH_VAR)
            .unwrap_or_else(|_| DEFAULT_SECRETS_PATH.to_owned());
        Self::from_sources(Path::new(&secrets_path), std::env::var(API_KEY_VAR).ok())
    }

    pub fn from_sources(
        secrets_path: &Path,
        env_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let secrets_file =
            File::new(&secrets_path.to_string_lossy(), FileFormat::Toml).required(false);
        let secrets: Secrets = Config::builder()
            .add_source(secrets_file)
            .build()?
            .try_deserialize()?;

        Ok(Settings {
            api_key: non_empty(secrets.groq_api_key).or_else(|| non_empty(env_api_key)),
            api_base: non_empty(secrets.groq_api_base)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
