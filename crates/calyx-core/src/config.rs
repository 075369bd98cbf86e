use anyhow::Result;
use config::builder::{ConfigBuilder, DefaultState};
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX, PRODUCT_ID};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

/// Defaults applied by the xCal reader and writer.
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// `PRODID` written into every generated document.
    pub product_id: String,
    /// Reject unknown elements instead of skipping them.
    pub strict: bool,
}

/// Log level for the embedding application's subscriber.
///
/// The library only emits `tracing` events and never installs a
/// subscriber; applications pass [`LoggingConfig::tracing_level`] to the
/// one they set up.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Parses the configured level into a `tracing` level.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the level is not one of
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub fn tracing_level(&self) -> CoreResult<tracing::Level> {
        self.level.parse::<tracing::Level>().map_err(|e| {
            CoreError::ConfigError(format!("invalid logging level {:?}: {e}", self.level))
        })
    }
}

impl Settings {
    /// ## Summary
    /// Returns a config builder with every default filled in.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be registered.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("codec.product_id", PRODUCT_ID)?
            .set_default("codec.strict", false)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from environment variables (`CALYX_CODEC__STRICT=true`)
    /// and an optional `calyx.toml` in the working directory.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            Self::builder()?
                // TOML file
                .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
                // Env
                .add_source(
                    config::Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("_")
                        .separator("__")
                        .ignore_empty(true)
                        .try_parsing(true),
                ),
        )
    }

    /// ## Summary
    /// Builds and validates settings from a prepared builder.
    ///
    /// ## Errors
    /// Returns an error if deserializing fails or the values are invalid.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder.build()?.try_deserialize::<Settings>()?;
        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values the type system cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` for an empty product id or an
    /// unknown logging level.
    pub fn validate(&self) -> CoreResult<()> {
        if self.codec.product_id.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "codec.product_id must not be empty".to_string(),
            ));
        }
        self.logging.tracing_level()?;
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
