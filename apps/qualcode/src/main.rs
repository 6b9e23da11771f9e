//! # Qualcode - The Architecture of Qualitative Coding
//!
//! The main binary for the coding walkthrough.
//!
//! This application provides:
//! - CLI interface (clap-based)
//! - Terminal presenter for the walkthrough view
//! - Interactive explore session
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 apps/qualcode (THE BINARY)               │
//! │                                                          │
//! │  ┌─────────────┐   ┌─────────────┐   ┌───────────────┐   │
//! │  │   CLI       │   │  Presenter  │   │ Explore loop  │   │
//! │  │  (clap)     │   │ (text/json) │   │   (stdin)     │   │
//! │  └──────┬──────┘   └──────┬──────┘   └───────┬───────┘   │
//! │         └─────────────────┼──────────────────┘           │
//! │                           ▼                              │
//! │                  ┌─────────────────┐                     │
//! │                  │  qualcode-core  │                     │
//! │                  │   (THE LOGIC)   │                     │
//! │                  └─────────────────┘                     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! qualcode                       # fresh-load view
//! qualcode show --expand 3       # stage 3 expanded
//! qualcode explore               # type 1-5 to toggle stages
//! qualcode -c my.toml check      # validate a custom catalog
//! qualcode export -o builtin.toml
//! ```

use clap::Parser;
use qualcode::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing on stderr; stdout carries the rendered view.
    // QUALCODE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("QUALCODE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "qualcode=debug"
    } else {
        "qualcode=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  raw data ─▶ codes ─▶ categories ─▶ themes ─▶ theory

  qualcode v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
