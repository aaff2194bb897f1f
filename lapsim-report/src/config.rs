//! Report configuration
//!
//! Defaults reproduce the standard 5-lap grid. A couple of environment
//! variables can override them:
//! - `LAPSIM_LAPS`: lap count
//! - `LAPSIM_FORMAT`: `text` or `json`

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const LAPS_ENV: &str = "LAPSIM_LAPS";
pub const FORMAT_ENV: &str = "LAPSIM_FORMAT";

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// One line per combination
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => bail!("unknown report format '{}' (expected 'text' or 'json')", other),
        }
    }
}

/// What to simulate and how to print it
///
/// Tire and style names are kept as strings so the grid can include names
/// the simulator does not know (unknown styles run as NORMAL, unknown tires
/// are reported as errors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub laps: u32,
    pub tires: Vec<String>,
    pub styles: Vec<String>,
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            laps: 5,
            tires: vec!["SOFT".into(), "MEDIUM".into(), "HARD".into()],
            styles: vec!["PUSH".into(), "NORMAL".into(), "CONSERVE".into()],
            format: ReportFormat::Text,
        }
    }
}

impl ReportConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(laps) = lookup(LAPS_ENV) {
            config.laps = laps
                .trim()
                .parse()
                .with_context(|| format!("invalid {} value '{}'", LAPS_ENV, laps))?;
        }

        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format
                .parse()
                .with_context(|| format!("invalid {} value", FORMAT_ENV))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.laps, 5);
        assert_eq!(config.tires, vec!["SOFT", "MEDIUM", "HARD"]);
        assert_eq!(config.styles, vec!["PUSH", "NORMAL", "CONSERVE"]);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_from_lookup_without_overrides() {
        let config = ReportConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config =
            ReportConfig::from_lookup(lookup_from(&[(LAPS_ENV, " 3 "), (FORMAT_ENV, "JSON")]))
                .unwrap();
        assert_eq!(config.laps, 3);
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn test_from_lookup_rejects_bad_laps() {
        let err = ReportConfig::from_lookup(lookup_from(&[(LAPS_ENV, "-2")])).unwrap_err();
        assert!(err.to_string().contains(LAPS_ENV));
    }

    #[test]
    fn test_from_lookup_rejects_bad_format() {
        let err = ReportConfig::from_lookup(lookup_from(&[(FORMAT_ENV, "csv")])).unwrap_err();
        assert!(err.to_string().contains(FORMAT_ENV));
        assert!(format!("{:#}", err).contains("unknown report format 'csv'"));
    }
}
