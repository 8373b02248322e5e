//! Error adapter for converting CasemapError to miette diagnostics.
//!
//! This module bridges the library's standard error types and miette's
//! diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use casemap::{CasemapError, ProjectionError, ast::GroupKind, json};

/// Adapter that presents a [`CasemapError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a CasemapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CasemapError::Io(_) => "casemap::io",
            CasemapError::Ast(_) => "casemap::ast",
            CasemapError::Projection(_) => "casemap::projection",
            CasemapError::Render(_) => "casemap::render",
            CasemapError::Config(_) => "casemap::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: String = match self.0 {
            CasemapError::Io(_) => {
                "check that the input file exists and the output location is writable".into()
            }
            CasemapError::Ast(_) => format!(
                "the input must be a JSON object with \"{}\": \"Document\" or an array of diagrams",
                json::NODE_KEY
            ),
            CasemapError::Projection(ProjectionError::MalformedNode { .. }) => format!(
                "every actor, use case, {} and {} needs a `name`",
                GroupKind::Package,
                GroupKind::Rectangle
            ),
            CasemapError::Render(_) => return None,
            CasemapError::Config(_) => {
                "set `projection.strategy` to basic or enriched and `output.format` to json or yaml"
                    .into()
            }
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap `err` for rendering with a miette report handler.
pub fn to_reportable(err: &CasemapError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
