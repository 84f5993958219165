//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::declaration::{ScanOptions, DEFAULT_EXTENSION};
use crate::differ::ReportFormat;

/// pkgcheck - Report declared package versions missing from an installed list.
#[derive(Debug, Parser)]
#[command(name = "pkgcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub check: CheckArgs,

    /// Show a summary after the report
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Arguments for the missing-package check.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Directory containing package declaration files
    #[arg(value_name = "DECLARATIONS_DIR")]
    pub declarations_dir: PathBuf,

    /// File listing installed packages, one name@version per line
    #[arg(value_name = "INSTALLED_LIST")]
    pub installed_list: PathBuf,

    /// Declaration file extensions to read (comma-separated)
    #[arg(
        short,
        long = "extension",
        value_name = "EXT",
        value_delimiter = ',',
        env = "PKGCHECK_EXTENSIONS",
        default_value = DEFAULT_EXTENSION
    )]
    pub extensions: Vec<String>,

    /// Skip malformed declaration files instead of aborting
    #[arg(long, env = "PKGCHECK_SKIP_MALFORMED")]
    pub skip_malformed: bool,

    /// Output the missing packages as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Create arguments for the given inputs with default options.
    pub fn new(declarations_dir: impl Into<PathBuf>, installed_list: impl Into<PathBuf>) -> Self {
        Self {
            declarations_dir: declarations_dir.into(),
            installed_list: installed_list.into(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            skip_malformed: false,
            json: false,
        }
    }

    /// Collector options derived from these arguments.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(&self.extensions, self.skip_malformed)
    }

    /// Report format derived from these arguments.
    pub fn report_format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }
}
