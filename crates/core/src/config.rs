use std::path::PathBuf;

use serde::Deserialize;

use crate::retry::RetryPolicy;

/// Client configuration. Loaded from a TOML profile in the user's home
/// directory merged with environment variables prefixed `ADGRID__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdGridConfig {
    /// Developer token identifying the API consumer.
    pub developer_token: String,
    /// OAuth2 access token sent as the bearer credential.
    pub access_token: String,
    /// Manager account to authenticate under, if any.
    #[serde(default)]
    pub login_customer_id: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_endpoint() -> String {
    "https://api.adgrid.example.com".to_string()
}
fn default_api_version() -> String {
    "v1".to_string()
}

impl AdGridConfig {
    /// Load configuration from the profile file and environment variables.
    ///
    /// The profile path is `$ADGRID_CONFIGURATION_FILE_PATH` when set,
    /// otherwise `$HOME/adgrid.toml`. A missing file is not an error as
    /// long as the environment supplies the required credentials.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = Self::profile_path() {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ADGRID")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    fn profile_path() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var("ADGRID_CONFIGURATION_FILE_PATH") {
            return Some(PathBuf::from(explicit));
        }
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("adgrid.toml"))
    }
}
