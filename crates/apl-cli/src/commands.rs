use std::sync::{Arc, Mutex};

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;

use apl_loader::{FsFetcher, LoaderRegistry};
use apl_preload::{PreloadCallback, Preloader, PreloaderConfig, RunState};
use apl_store::AssetLookup;
use apl_types::AssetKind;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Decode(args) => cmd_decode(args, cli.format),
        Command::Scan(args) => cmd_scan(args),
        Command::Preload(args) => cmd_preload(args, cli.format).await,
    }
}

fn cmd_decode(args: DecodeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.manifest)
        .with_context(|| format!("reading {}", args.manifest.display()))?;
    let entries = apl_manifest::decode(&raw);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                println!("  {:<9} {}", kind_label(entry.kind), entry.url);
            }
            println!("{} entries", entries.len().to_string().bold());
        }
    }
    Ok(())
}

fn cmd_scan(args: ScanArgs) -> anyhow::Result<()> {
    let entries = apl_manifest::scan(&args.root)
        .with_context(|| format!("scanning {}", args.root.display()))?;
    let mut manifest = apl_manifest::encode(&entries);
    manifest.push('\n');

    match args.output {
        Some(path) => {
            std::fs::write(&path, manifest)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "{} Wrote {} entries to {}",
                "✓".green().bold(),
                entries.len(),
                path.display().to_string().bold()
            );
        }
        None => print!("{manifest}"),
    }
    Ok(())
}

async fn cmd_preload(args: PreloadArgs, format: OutputFormat) -> anyhow::Result<()> {
    let preloader = build_preloader(&args)?;
    let manifest = args
        .manifest
        .clone()
        .unwrap_or_else(|| preloader.config().manifest.clone());

    let console = ConsoleCallback::new(format == OutputFormat::Text);
    let state = preloader.preload(&manifest, &console).await?;
    let failed = console.failed();

    let inspected: Vec<Inspection> = args
        .inspect
        .iter()
        .map(|url| Inspection::of(&preloader, url))
        .collect();

    match format {
        OutputFormat::Json => {
            let summary = Summary {
                manifest: &manifest,
                state: state.to_string(),
                finished: preloader.loaded(),
                total: preloader.total(),
                failed: &failed,
                inspected: &inspected,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            for item in &inspected {
                println!("  {} {}", "inspect".cyan(), item.render());
            }
        }
    }

    if state == RunState::ManifestFailed {
        anyhow::bail!("manifest {manifest} could not be fetched");
    }
    Ok(())
}

fn build_preloader(args: &PreloadArgs) -> anyhow::Result<Preloader> {
    let mut config = match &args.config {
        Some(path) => PreloaderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PreloaderConfig::default(),
    };
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }

    let fetcher = match &args.root {
        Some(root) => FsFetcher::with_root(root),
        None => FsFetcher::new(),
    };
    Ok(Preloader::new(
        config,
        LoaderRegistry::with_fetcher(Arc::new(fetcher)),
    ))
}

fn kind_label(kind: AssetKind) -> colored::ColoredString {
    let label = kind.to_string();
    match kind {
        AssetKind::Text => label.normal(),
        AssetKind::Image => label.magenta(),
        AssetKind::Binary => label.blue(),
        AssetKind::Audio => label.yellow(),
        AssetKind::Directory => label.dimmed(),
    }
}

// ---------------------------------------------------------------------------
// Console progress
// ---------------------------------------------------------------------------

/// Prints progress as it arrives and keeps the urls that failed.
struct ConsoleCallback {
    echo: bool,
    failed: Mutex<Vec<String>>,
}

impl ConsoleCallback {
    fn new(echo: bool) -> Self {
        Self {
            echo,
            failed: Mutex::new(Vec::new()),
        }
    }

    fn failed(&self) -> Vec<String> {
        self.failed.lock().expect("lock poisoned").clone()
    }
}

impl PreloadCallback for ConsoleCallback {
    fn loaded(&self, url: &str, loaded: usize, total: usize) {
        if self.echo {
            println!("  [{loaded}/{total}] {} {url}", "loaded".green());
        }
    }

    fn error(&self, url: &str) {
        self.failed
            .lock()
            .expect("lock poisoned")
            .push(url.to_string());
        if self.echo {
            println!("  {} {url}", "failed".red().bold());
        }
    }

    fn done(&self) {
        if self.echo {
            let failed = self.failed.lock().expect("lock poisoned").len();
            if failed == 0 {
                println!("{} Preload complete.", "✓".green().bold());
            } else {
                println!(
                    "{} Preload complete, {} failed.",
                    "!".yellow().bold(),
                    failed.to_string().red()
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Summary<'a> {
    manifest: &'a str,
    state: String,
    finished: usize,
    total: usize,
    failed: &'a [String],
    inspected: &'a [Inspection],
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Inspection {
    url: String,
    kind: Option<AssetKind>,
    length: u64,
}

impl Inspection {
    fn of(preloader: &Preloader, url: &str) -> Self {
        let store = preloader.store();
        let kind = if store.is_text(url) {
            Some(AssetKind::Text)
        } else if store.is_image(url) {
            Some(AssetKind::Image)
        } else if store.is_binary(url) {
            Some(AssetKind::Binary)
        } else if store.is_audio(url) {
            Some(AssetKind::Audio)
        } else {
            None
        };
        Self {
            url: url.to_string(),
            kind,
            length: store.length(url),
        }
    }

    fn render(&self) -> String {
        match self.kind {
            Some(kind) => format!("{} ({kind}, {} bytes)", self.url, self.length),
            None => format!("{} (not loaded)", self.url),
        }
    }
}
