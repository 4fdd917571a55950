//! Output formatting for CLI commands.
//!
//! Report rows arrive as JSON values and are rendered either as aligned
//! human-readable text or as JSON / JSON Lines for programmatic use.

use crate::error::Result;
use colored::Colorize;
use serde_json::Value;
use staffq_ops::JsonlWriter;
use std::env;
use std::io::Write;

/// Output mode for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text format
    #[default]
    Text,
    /// A single pretty-printed JSON array
    Json,
    /// One compact JSON object per line
    Jsonl,
}

/// Configuration for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `STAFFQ_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        if env::var_os("NO_COLOR").is_some() {
            return Self::new(false);
        }

        let use_colors = match env::var("STAFFQ_COLOR") {
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") || v.is_empty() => true,
            Ok(v) => {
                tracing::warn!(
                    env_var = "STAFFQ_COLOR",
                    value = %v,
                    "Invalid value, using colors"
                );
                true
            }
            Err(_) => true,
        };

        Self::new(use_colors)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Write result rows in the requested mode.
///
/// `title` heads text output and is ignored by the JSON modes.
///
/// # Errors
///
/// Returns an error if writing or serialization fails.
pub fn write_rows<W: Write>(
    out: &mut W,
    title: &str,
    rows: &[Value],
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    match mode {
        OutputMode::Text => write_text(out, title, rows, config),
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
            Ok(())
        }
        OutputMode::Jsonl => {
            let mut writer = JsonlWriter::new(&mut *out);
            writer.write_all(rows)?;
            writer.into_inner()?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(
    out: &mut W,
    title: &str,
    rows: &[Value],
    config: &OutputConfig,
) -> Result<()> {
    let heading = format!("{title} ({} rows)", rows.len());
    writeln!(out, "{}", paint(&heading, config, |s| s.bold().cyan().to_string()))?;

    if rows.is_empty() {
        writeln!(out, "  {}", paint("(no rows)", config, |s| s.dimmed().to_string()))?;
        return Ok(());
    }

    for row in rows {
        writeln!(out, "  {}", format_row(row, config))?;
    }
    Ok(())
}

fn paint(text: &str, config: &OutputConfig, style: impl Fn(&str) -> String) -> String {
    if config.use_colors {
        style(text)
    } else {
        text.to_string()
    }
}

fn format_row(row: &Value, config: &OutputConfig) -> String {
    match row {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| {
                format!(
                    "{} {}",
                    paint(&format!("{key}:"), config, |s| s.dimmed().to_string()),
                    format_value(value)
                )
            })
            .collect::<Vec<_>>()
            .join("  "),
        other => format_value(other),
    }
}

/// Render a JSON value for text output: strings unquoted, null as `-`,
/// arrays of scalars comma-separated, anything nested as compact JSON.
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => {
            format!(
                "[{}]",
                items.iter().map(format_value).collect::<Vec<_>>().join(", ")
            )
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(rows: &[Value], mode: OutputMode) -> String {
        let mut buf = Vec::new();
        write_rows(&mut buf, "jobs", rows, mode, &OutputConfig::new(false)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_lists_fields_per_row() {
        let rows = vec![json!({ "job": "CLERK", "count": 2 })];
        let text = render(&rows, OutputMode::Text);
        assert!(text.starts_with("jobs (1 rows)\n"));
        assert!(text.contains("job: CLERK"));
        assert!(text.contains("count: 2"));
    }

    #[test]
    fn text_marks_empty_results() {
        assert!(render(&[], OutputMode::Text).contains("(no rows)"));
    }

    #[test]
    fn json_is_one_array() {
        let rows = vec![json!({ "a": 1 }), json!({ "a": 2 })];
        let parsed: Value = serde_json::from_str(&render(&rows, OutputMode::Json)).unwrap();
        assert_eq!(parsed, json!([{ "a": 1 }, { "a": 2 }]));
    }

    #[test]
    fn jsonl_is_one_line_per_row() {
        let rows = vec![json!({ "a": 1 }), json!({ "a": 2 })];
        assert_eq!(render(&rows, OutputMode::Jsonl), "{\"a\":1}\n{\"a\":2}\n");
    }

    #[test]
    fn values_format_for_humans() {
        assert_eq!(format_value(&Value::Null), "-");
        assert_eq!(format_value(&json!("KING")), "KING");
        assert_eq!(format_value(&json!(["SMITH", "ADAMS"])), "[SMITH, ADAMS]");
        assert_eq!(format_value(&json!([{ "x": 1 }])), "[{\"x\":1}]");
    }
}
