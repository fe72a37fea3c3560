//! Output rendering
//!
//! Turns engine snapshots and the history log into text or JSON lines.

use crate::config::{OutputConfig, OutputFormat};
use anyhow::Result;
use calc_engine::{HistoryEntry, Snapshot};
use serde::Serialize;

/// One output record per input line
#[derive(Debug, Serialize)]
struct Record<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a str>,
    #[serde(flatten)]
    snapshot: &'a Snapshot,
}

/// Render the state after one input line
pub fn render_snapshot(snapshot: &Snapshot, token: &str, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Json => {
            let record = Record {
                token: output.echo_tokens.then_some(token),
                snapshot,
            };
            Ok(serde_json::to_string(&record)?)
        }
        OutputFormat::Text => {
            let mut parts = Vec::new();
            if output.echo_tokens {
                parts.push(format!("{} -> {}", token, snapshot.display));
            } else {
                parts.push(snapshot.display.clone());
            }
            if output.show_history && !snapshot.history.is_empty() {
                parts.push(snapshot.history.clone());
            }
            if let Some(error) = &snapshot.error {
                parts.push(format!("error: {}", error));
            }
            Ok(parts.join(" | "))
        }
    }
}

/// Render the completed calculations
pub fn render_history(entries: &[HistoryEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(entries)?),
        OutputFormat::Text => {
            if entries.is_empty() {
                return Ok("(no calculations yet)".to_string());
            }
            let lines: Vec<String> = entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    format!(
                        "{:>3}. {}  [{}]",
                        i + 1,
                        entry.expression,
                        entry.recorded_at.format("%H:%M:%S")
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
