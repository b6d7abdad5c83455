//! Short-link configuration.

use serde::{Deserialize, Serialize};

/// Short-code generation and resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Number of characters in a generated short code.
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// Candidates tried before giving up on a create.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// How `/r/{code}` answers a successful lookup.
    #[serde(default)]
    pub resolve_mode: ResolveMode,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            max_attempts: default_max_attempts(),
            resolve_mode: ResolveMode::default(),
        }
    }
}

/// Response shape for resolved short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// `303 See Other` pointing at the original URL.
    #[default]
    Redirect,
    /// `200 OK` with the original URL in the JSON body.
    Payload,
}

fn default_code_length() -> usize {
    10
}

fn default_max_attempts() -> u32 {
    16
}
