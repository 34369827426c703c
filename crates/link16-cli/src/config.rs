//! CLI configuration.
//!
//! Read once from the environment at startup; command-line flags override
//! individual settings afterwards.

use clap::ValueEnum;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Abort stream decoding on an unknown family.
    pub strict: bool,
    /// Output format.
    pub output: OutputFormat,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            strict: false,
            output: OutputFormat::Text,
        }
    }
}

impl InspectConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable           | Default | Description                                  |
    /// |--------------------|---------|----------------------------------------------|
    /// | `LINK16_LOG_LEVEL` | `info`  | Log filter used when `RUST_LOG` is unset     |
    /// | `LINK16_STRICT`    | `false` | Fail on unknown families instead of skipping |
    /// | `LINK16_OUTPUT`    | `text`  | `text` or `json`                             |
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_level = lookup("LINK16_LOG_LEVEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_level);

        let strict = lookup("LINK16_STRICT")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.strict);

        let output = lookup("LINK16_OUTPUT")
            .and_then(|v| OutputFormat::from_str(v.trim(), true).ok())
            .unwrap_or(defaults.output);

        Self {
            log_level,
            strict,
            output,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> InspectConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        InspectConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config(&[]), InspectConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("LINK16_LOG_LEVEL", "debug"),
            ("LINK16_STRICT", "yes"),
            ("LINK16_OUTPUT", "JSON"),
        ]);
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.strict);
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            ("LINK16_LOG_LEVEL", "  "),
            ("LINK16_STRICT", "maybe"),
            ("LINK16_OUTPUT", "xml"),
        ]);
        assert_eq!(cfg, InspectConfig::default());
    }
}
