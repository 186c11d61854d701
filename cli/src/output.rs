//! Output formatting for parsed commands and reports.

use edutrack_parser::{Cardinality, PrefixSpec};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Formats any serializable value as a pretty document.
pub fn format_document<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}

/// Formats a value for line-oriented output: compact JSON on one line, or a
/// YAML document starting with `---`.
pub fn format_line<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(value).map_err(|e| format!("JSON serialization failed: {e}"))
        }
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map(|yaml| format!("---\n{}", yaml.trim_end()))
            .map_err(|e| format!("YAML serialization failed: {e}")),
    }
}

/// Renders the prefix table as aligned text.
pub fn prefix_table(specs: &[PrefixSpec]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<8}{:<10}{}\n", "PREFIX", "FIELD", "VALUES"));
    for spec in specs {
        let values = match spec.cardinality {
            Cardinality::Single => "single",
            Cardinality::Repeatable => "repeatable",
        };
        out.push_str(&format!(
            "{:<8}{:<10}{}\n",
            spec.prefix.as_str(),
            spec.field.to_string(),
            values
        ));
    }
    out
}
