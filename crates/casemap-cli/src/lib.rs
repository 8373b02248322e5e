//! CLI logic for the Casemap projection tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use casemap::{CasemapError, Projector};

/// Run the Casemap CLI application
///
/// Loads the configuration, applies command-line overrides, reads the JSON
/// AST dump, projects it, and writes the rendered projection to the output
/// file.
///
/// # Errors
///
/// Returns `CasemapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Undecodable AST dumps
/// - Declarations without a name
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CasemapError> {
    info!(input_path = args.input; "Processing AST dump");

    // Load configuration, then apply command-line overrides
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(strategy) = args.strategy {
        app_config = app_config.with_strategy(strategy);
    }
    if let Some(format) = args.format {
        app_config = app_config.with_format(format);
    }

    let output_path = args.output_path(app_config.output().format());

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Project the AST dump using the Projector API
    let projector = Projector::new(app_config);
    let root = projector.load(&source)?;
    let projection = projector.project(&root)?;
    let text = projector.render(&projection)?;

    // Write output file
    fs::write(&output_path, text)?;

    info!(output_file = output_path; "Projection exported successfully");

    Ok(())
}
