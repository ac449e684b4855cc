//! CLI commands for wordlens.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;

use crate::config::{load_settings, Settings};
use crate::ocr::{TesseractEngine, WordExtractor};

#[derive(Parser)]
#[command(name = "wordlens")]
#[command(about = "OCR word-overlay extraction service")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to wordlens.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Bind address: "PORT", "HOST", or "HOST:PORT"
        #[arg(short, long, env = "WORDLENS_BIND")]
        bind: Option<String>,
    },

    /// Extract word records from an image and print them as JSON
    Extract {
        /// Image file to recognize
        image: PathBuf,
        /// Language/script selector passed to the engine
        #[arg(short, long)]
        lang: Option<String>,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show OCR engine availability
    Status,
}

/// Parse arguments and dispatch the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => cmd_serve(&settings, bind.as_deref()).await,
        Commands::Extract {
            image,
            lang,
            pretty,
        } => cmd_extract(&settings, &image, lang.as_deref(), pretty),
        Commands::Status => cmd_status(&settings),
    }
}

async fn cmd_serve(settings: &Settings, bind: Option<&str>) -> anyhow::Result<()> {
    let (host, port) = match bind {
        Some(bind) => parse_bind_address(bind, settings)?,
        None => (settings.host.clone(), settings.port),
    };

    println!(
        "{} Starting wordlens server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> configured host, port 8080
/// - Just a host: "0.0.0.0" -> 0.0.0.0, configured port
/// - Both: "0.0.0.0:8080"
fn parse_bind_address(bind: &str, settings: &Settings) -> anyhow::Result<(String, u16)> {
    if let Some((host, port)) = bind.rsplit_once(':') {
        let port = port
            .parse()
            .with_context(|| format!("invalid port in bind address '{}'", bind))?;
        Ok((host.to_string(), port))
    } else if let Ok(port) = bind.parse::<u16>() {
        Ok((settings.host.clone(), port))
    } else {
        Ok((bind.to_string(), settings.port))
    }
}

fn cmd_extract(
    settings: &Settings,
    image_path: &Path,
    lang: Option<&str>,
    pretty: bool,
) -> anyhow::Result<()> {
    let languages = lang.unwrap_or(&settings.languages);
    let extractor = WordExtractor::with_languages(languages);

    let image = image::open(image_path)
        .with_context(|| format!("failed to open image {}", image_path.display()))?;

    match extractor.extract(&image) {
        Ok(extraction) => {
            let json = if pretty {
                serde_json::to_string_pretty(&extraction)?
            } else {
                serde_json::to_string(&extraction)?
            };
            println!("{}", json);
            Ok(())
        }
        Err(e) if e.is_unavailable() => {
            eprintln!(
                "{} {}",
                style("✗").red(),
                extractor.engine().availability_hint()
            );
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_status(settings: &Settings) -> anyhow::Result<()> {
    let engine = TesseractEngine::new(settings.languages.clone());

    if engine.is_available() {
        println!("{} {}", style("✓").green(), engine.availability_hint());
    } else {
        println!("{} {}", style("✗").red(), engine.availability_hint());
    }
    println!("  languages: {}", settings.languages);

    Ok(())
}
