//! # Qualcode CLI Module
//!
//! This module implements the CLI interface for qualcode.
//!
//! ## Available Commands
//!
//! - `show` - Render the walkthrough once (default)
//! - `explore` - Interactive session over stdin
//! - `stages` - List the five stages
//! - `stage` - Show one stage's detail
//! - `examples` - List worked example keys
//! - `check` - Validate a catalog and report coverage gaps
//! - `export` - Write the active catalog as TOML

mod commands;

use clap::{Parser, Subcommand};
use qualcode_core::{AsciiGlyphs, CodingError, Glyphs, UnicodeGlyphs};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Qualcode - The Architecture of Qualitative Coding
///
/// Walks from raw data through codes, categories and themes to theory,
/// one stage at a time.
#[derive(Parser, Debug)]
#[command(name = "qualcode")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Load stages and examples from a TOML catalog instead of the built-in one
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json: bool,

    /// Draw icons with ASCII characters only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Glyph set selected by `--ascii`.
    pub fn glyphs(&self) -> &'static dyn Glyphs {
        if self.ascii {
            &AsciiGlyphs
        } else {
            &UnicodeGlyphs
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the walkthrough once
    Show {
        /// Stage to expand (1-5)
        #[arg(short, long)]
        expand: Option<u8>,

        /// Worked example to show
        #[arg(short = 'x', long)]
        example: Option<String>,
    },

    /// Explore interactively: type a stage number to expand or collapse it
    Explore,

    /// List the five stages
    Stages,

    /// Show one stage's detail
    Stage {
        /// Stage id (1-5)
        id: u8,
    },

    /// List worked example keys
    Examples,

    /// Validate the catalog and report coverage gaps
    Check,

    /// Write the active catalog as TOML
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CodingError> {
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let glyphs = cli.glyphs();
    let json = cli.json;

    match cli.command {
        Some(Commands::Show { expand, example }) => {
            cmd_show(&catalog, glyphs, json, expand, example.as_deref())
        }
        Some(Commands::Explore) => cmd_explore(&catalog, glyphs),
        Some(Commands::Stages) => cmd_stages(&catalog, json),
        Some(Commands::Stage { id }) => cmd_stage(&catalog, glyphs, json, id),
        Some(Commands::Examples) => cmd_examples(&catalog, json),
        Some(Commands::Check) => cmd_check(&catalog, json),
        Some(Commands::Export { output }) => cmd_export(&catalog, &output),
        None => {
            // No subcommand - render the fresh-load view
            cmd_show(&catalog, glyphs, json, None, None)
        }
    }
}
