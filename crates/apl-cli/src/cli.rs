use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "apl",
    about = "Asset preloader: decode, generate, and preload asset manifests",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a manifest file and list its entries
    Decode(DecodeArgs),
    /// Generate a manifest from an asset directory
    Scan(ScanArgs),
    /// Preload every asset listed in a manifest
    Preload(PreloadArgs),
}

#[derive(Args)]
pub struct DecodeArgs {
    pub manifest: PathBuf,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Asset directory to scan
    pub root: PathBuf,
    /// Write the manifest here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct PreloadArgs {
    /// Manifest url, relative to the base url (defaults to the configured one)
    pub manifest: Option<String>,
    /// Directory urls are resolved against
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// TOML preloader configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override the configured base url
    #[arg(long)]
    pub base_url: Option<String>,
    /// Print lookup details for these urls once the run completes
    #[arg(long = "inspect")]
    pub inspect: Vec<String>,
}
