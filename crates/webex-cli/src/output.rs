/*
[INPUT]:  Serializable API results
[OUTPUT]: JSON or YAML text for stdout
[POS]:    Presentation layer - command output rendering
[UPDATE]: When adding output formats
*/

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Render `value` in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).context("encode json output"),
        OutputFormat::Yaml => serde_yaml::to_string(value).context("encode yaml output"),
    }
}
