//! libweb CLI - bundling and rendering for the library website components.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "libweb")]
#[command(about = "Bundler and renderer for library website components")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle the server and browser artifacts
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify bundle output
        #[arg(long)]
        minify: bool,
    },

    /// Render a widget's HTML fragment
    Render {
        /// Widget name (e.g. "search")
        widget: String,

        /// Write the fragment to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Build { output, minify } => {
            commands::build::run(output, minify).await?;
        }
        Commands::Render { widget, out } => {
            commands::render::run(&widget, out)?;
        }
    }

    Ok(())
}
