//! Public runtime configuration.
//!
//! These values are safe to ship to the client: the media host account name,
//! its public API key and the unsigned upload preset. They are read from
//! `PUBLIC_CLOUD_NAME`, `PUBLIC_CLOUD_API_KEY` and `PUBLIC_PRESET_NAME`,
//! layered over an optional `public.toml` in the working directory. A `.env`
//! file is honoured when present.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const ENV_PREFIX: &str = "PUBLIC";
const UPLOAD_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PublicConfig {
    #[serde(default)]
    pub cloud_name: Option<String>,
    #[serde(default)]
    pub cloud_api_key: Option<String>,
    #[serde(default)]
    pub preset_name: Option<String>,
}

impl PublicConfig {
    /// The well-known filename for the optional config file.
    pub fn filename() -> &'static str {
        "public.toml"
    }

    /// Load from the process environment (and `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit set of variables instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::build(Environment::with_prefix(ENV_PREFIX).source(Some(vars.into_iter().collect())))
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                File::with_name(Self::filename())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(env)
            .build()?;

        let public: Self = config.try_deserialize()?;
        if !public.can_upload() {
            tracing::debug!("media upload settings incomplete, uploads disabled");
        }
        Ok(public)
    }

    /// Whether unsigned media uploads are configured.
    pub fn can_upload(&self) -> bool {
        self.cloud_name.is_some() && self.preset_name.is_some()
    }

    /// Endpoint for unsigned image uploads.
    pub fn upload_url(&self) -> Option<String> {
        let name = self.cloud_name.as_deref()?;
        Some(format!("{UPLOAD_BASE_URL}/{name}/image/upload"))
    }
}
