//! Text rendering of a finished [`Projection`].
//!
//! Rendering is a plain serialization; all decisions have been made by the
//! time a projection exists. Both formats keep the record field order
//! declared in [`projection`](crate::projection), so output diffs cleanly.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::RenderError, projection::Projection};

/// Output text format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON with two-space indentation.
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Invalid output format `{s}`, expected `json` or `yaml`"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Serialize `projection` in the given format.
///
/// # Errors
///
/// Returns [`RenderError`] if the serializer fails.
pub fn render(projection: &Projection, format: OutputFormat) -> Result<String, RenderError> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(projection)?,
        OutputFormat::Yaml => serde_yaml::to_string(projection)?,
    };
    Ok(text)
}
