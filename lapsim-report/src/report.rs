//! Grid runner and output rendering
//!
//! Runs the simulator once per tire x style combination and renders the
//! results either as plain text lines or as a JSON document.

use crate::config::{ReportConfig, ReportFormat};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use lapsim_core::{simulate, RaceOutcome};
use serde::Serialize;
use tracing::debug;

/// Result of one grid cell
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub laps: u32,
    pub tire: String,
    pub style: String,
    #[serde(flatten)]
    pub outcome: RaceOutcome,
}

impl ReportEntry {
    /// Render as a single text line
    pub fn to_line(&self) -> String {
        format!(
            "Time needed to complete {} laps with {} tires and {} style: {} seconds, Final tire condition: {:.2}%",
            self.laps, self.tire, self.style, self.outcome.time_elapsed, self.outcome.tire_condition.0
        )
    }
}

/// Complete report document
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub laps: u32,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(laps: u32, entries: Vec<ReportEntry>) -> Self {
        Self {
            generated_at: Utc::now(),
            laps,
            entries,
        }
    }

    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(ReportEntry::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => self.to_json().context("failed to serialize report"),
        }
    }
}

/// Simulate every tire x style combination, tires in the outer loop
///
/// Stops at the first combination that fails.
pub fn run_grid(config: &ReportConfig) -> Result<Vec<ReportEntry>> {
    let mut entries = Vec::with_capacity(config.tires.len() * config.styles.len());

    for tire in &config.tires {
        for style in &config.styles {
            let outcome = simulate(config.laps, tire, style).with_context(|| {
                format!(
                    "simulating {} laps with {} tires and {} style",
                    config.laps, tire, style
                )
            })?;
            debug!(
                tire = %tire,
                style = %style,
                time_elapsed = outcome.time_elapsed.0,
                "Combination simulated"
            );
            entries.push(ReportEntry {
                laps: config.laps,
                tire: tire.clone(),
                style: style.clone(),
                outcome,
            });
        }
    }

    Ok(entries)
}

/// Run the grid and build the report document
pub fn build_report(config: &ReportConfig) -> Result<Report> {
    Ok(Report::new(config.laps, run_grid(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapsim_core::units::{Seconds, TireCondition};

    fn entry(tire: &str, style: &str, time: u32, condition: f64) -> ReportEntry {
        ReportEntry {
            laps: 5,
            tire: tire.to_string(),
            style: style.to_string(),
            outcome: RaceOutcome {
                time_elapsed: Seconds(time),
                tire_condition: TireCondition(condition),
                lap_records: Vec::new(),
            },
        }
    }

    #[test]
    fn test_entry_line_format() {
        let line = entry("SOFT", "PUSH", 244, 38.08000000000013).to_line();
        assert_eq!(
            line,
            "Time needed to complete 5 laps with SOFT tires and PUSH style: 244 seconds, Final tire condition: 38.08%"
        );
    }

    #[test]
    fn test_entry_line_pads_two_decimals() {
        let line = entry("MEDIUM", "PUSH", 240, 60.4).to_line();
        assert!(line.ends_with("Final tire condition: 60.40%"));

        let line = entry("SOFT", "PUSH", 782, 0.0).to_line();
        assert!(line.ends_with("Final tire condition: 0.00%"));
    }

    #[test]
    fn test_text_report_joins_lines() {
        let report = Report::new(
            5,
            vec![entry("SOFT", "PUSH", 244, 38.08), entry("SOFT", "NORMAL", 239, 56.98)],
        );
        let text = report.to_text();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().contains("NORMAL style: 239 seconds"));
    }

    #[test]
    fn test_empty_grid_renders_empty_text() {
        let config = ReportConfig {
            tires: Vec::new(),
            ..Default::default()
        };
        let report = build_report(&config).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.render(ReportFormat::Text).unwrap(), "");
    }
}
