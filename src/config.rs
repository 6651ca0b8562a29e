//! Enhancer configuration.
//!
//! Defaults are usable as-is; a TOML file and environment variables can
//! override them.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;

pub const ENV_MAX_INPUT_BYTES: &str = "OCR_ENHANCE_MAX_INPUT_BYTES";
pub const ENV_MIN_TEXT_CHARS: &str = "OCR_ENHANCE_MIN_TEXT_CHARS";

const DEFAULT_MAX_INPUT_BYTES: usize = 4 * 1024 * 1024;
const DEFAULT_MIN_TEXT_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    /// Texts larger than this are rejected before any stage runs
    pub max_input_bytes: usize,
    /// A recognition needs more than this many alphanumeric characters
    /// to count as real text
    pub min_text_chars: usize,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
        }
    }
}

impl EnhancerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply environment overrides on top of the current values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(value) = env_usize(ENV_MAX_INPUT_BYTES) {
            self.max_input_bytes = value;
        }
        if let Some(value) = env_usize(ENV_MIN_TEXT_CHARS) {
            self.min_text_chars = value;
        }
        self
    }
}

fn env_usize(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring non-numeric override");
            None
        }
    }
}
