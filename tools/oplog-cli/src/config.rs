//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Inputs for the demo scenarios.
    #[serde(default)]
    pub demo: DemoConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content, choosing the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Inputs used by `oplog demo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Text passed to `reverseString`.
    #[serde(default = "default_reverse_input")]
    pub reverse_input: String,

    /// Text passed to `toUpperCase`.
    #[serde(default = "default_upper_input")]
    pub upper_input: String,

    /// Operands passed to `add`.
    #[serde(default = "default_add_operands")]
    pub add_operands: [i64; 2],

    /// Operands passed to `divide`; the default divides by zero.
    #[serde(default = "default_divide_operands")]
    pub divide_operands: [f64; 2],
}

fn default_reverse_input() -> String {
    "Hello World".to_string()
}

fn default_upper_input() -> String {
    "java decorator pattern".to_string()
}

fn default_add_operands() -> [i64; 2] {
    [15, 25]
}

fn default_divide_operands() -> [f64; 2] {
    [10.0, 0.0]
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            reverse_input: default_reverse_input(),
            upper_input: default_upper_input(),
            add_operands: default_add_operands(),
            divide_operands: default_divide_operands(),
        }
    }
}
