use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::Deserialize;

#[cfg(feature = "serde")]
use crate::error::ConvertError;
use crate::header::DEFAULT_SYMBOL;

pub const DEFAULT_INPUT: &str = "3dprint/augmental_logo.png";
pub const DEFAULT_OUTPUT: &str = "app/src/augmental_logo.h";

/// Fully resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub symbol: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            symbol: DEFAULT_SYMBOL.to_string(),
        }
    }
}

impl ConvertOptions {
    /// Parse a TOML config file, filling missing keys with defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, ConvertError> {
        Ok(PartialOptions::from_toml(toml_str)?.resolve())
    }
}

/// Settings from a single source (command line or config file); unset
/// fields fall through to the next source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(deny_unknown_fields))]
pub struct PartialOptions {
    #[cfg_attr(feature = "serde", serde(default))]
    pub input: Option<PathBuf>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub output: Option<PathBuf>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub symbol: Option<String>,
}

impl PartialOptions {
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, ConvertError> {
        toml::from_str(toml_str).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Keep fields set here, take the rest from `fallback`.
    pub fn or(self, fallback: PartialOptions) -> PartialOptions {
        PartialOptions {
            input: self.input.or(fallback.input),
            output: self.output.or(fallback.output),
            symbol: self.symbol.or(fallback.symbol),
        }
    }

    /// Fill anything still unset with the built-in defaults.
    pub fn resolve(self) -> ConvertOptions {
        let defaults = ConvertOptions::default();
        ConvertOptions {
            input: self.input.unwrap_or(defaults.input),
            output: self.output.unwrap_or(defaults.output),
            symbol: self.symbol.unwrap_or(defaults.symbol),
        }
    }
}
