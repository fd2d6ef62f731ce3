/// Tonearm CLI - reference consumer for the metadata bridge
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tonearm_core::ExtractOptions;
use tonearm_extract::MetadataBridge;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tonearm")]
#[command(about = "Read metadata and embedded artwork from a media file", long_about = None)]
struct Cli {
    /// Path to the media file
    path: PathBuf,

    /// Also extract the embedded thumbnail (base64)
    #[arg(long)]
    thumb: bool,

    /// Print the full record as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonearm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let bridge = MetadataBridge::default();
    let options = ExtractOptions {
        get_thumb: cli.thumb,
    };

    let metadata = match bridge.get(&cli.path, options).await {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::error!(code = e.code(), "{e}");
            eprintln!("Error fetching media metadata");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&metadata) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("{e}");
                eprintln!("Error fetching media metadata");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Title:  {}", metadata.title.as_deref().unwrap_or("-"));
    println!("Artist: {}", metadata.artist.as_deref().unwrap_or("-"));
    println!("Album:  {}", metadata.album.as_deref().unwrap_or("-"));
    println!("Genre:  {}", metadata.genre.as_deref().unwrap_or("-"));
    if let Some(thumb) = &metadata.thumb {
        println!("Thumbnail: {} base64 chars", thumb.len());
    }

    ExitCode::SUCCESS
}
