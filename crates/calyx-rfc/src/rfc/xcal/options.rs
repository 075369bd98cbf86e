//! Reader and writer settings.

use calyx_core::config::CodecConfig;
use calyx_core::constants::PRODUCT_ID;
use calyx_core::error::CoreError;

use super::core::check_text;
use crate::error::RfcError;

/// Settings for [`super::write_event_with`] and [`super::write_todo_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// `PRODID` written into the calendar envelope.
    pub product_id: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            product_id: PRODUCT_ID.to_string(),
        }
    }
}

impl TryFrom<&CodecConfig> for WriterOptions {
    type Error = RfcError;

    fn try_from(config: &CodecConfig) -> Result<Self, Self::Error> {
        if config.product_id.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "codec.product_id must not be empty".to_string(),
            )
            .into());
        }
        check_text("codec.product_id", &config.product_id)?;
        Ok(Self {
            product_id: config.product_id.clone(),
        })
    }
}

/// Settings for [`super::read_event_with`] and [`super::read_todo_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Reject unknown elements, foreign namespaces and other versions
    /// instead of skipping them with a warning.
    pub strict: bool,
}

impl From<&CodecConfig> for ReaderOptions {
    fn from(config: &CodecConfig) -> Self {
        Self {
            strict: config.strict,
        }
    }
}
