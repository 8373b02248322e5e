//! Command-line argument definitions for the Casemap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, overrides for configured settings, and logging verbosity.

use clap::Parser;

use casemap::{render::OutputFormat, resolve::Strategy};

/// Command-line arguments for the Casemap projection tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON AST dump
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file [default: out.json, or out.yaml for YAML output]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Name resolution strategy (basic, enriched), overrides the config file
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Output format (json, yaml), overrides the config file
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The output path, defaulting to `out.<ext>` for the given format.
    pub fn output_path(&self, format: OutputFormat) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("out.{}", format.extension()))
    }
}
