//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docjinja")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render documents with the configuration options injected
    Render(RenderArgs),

    /// Show the configuration options templates can use
    Config {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where the documentation sources and their configuration live
#[derive(Args)]
pub struct SourceArgs {
    /// Documentation source directory
    #[arg(long, default_value = ".")]
    pub srcdir: PathBuf,

    /// Configuration document, relative to the source directory
    /// [default: _static/configuration.json]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Source files to render
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format of the builder; only html renders templates
    #[arg(long, default_value = "html")]
    pub format: String,

    /// Write rendered documents under this directory instead of stdout
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}
