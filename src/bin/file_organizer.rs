//! src/bin/file_organizer.rs
use clap::Parser;
use std::path::PathBuf;
use wordstat::organizer::FileOrganizer;
use wordstat::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(about = "Copies files into per-extension folders under the output folder")]
struct Args {
    /// Folder to scan recursively
    source_folder: PathBuf,
    /// Folder receiving the extension buckets
    output_folder: PathBuf,
}

// Walk errors are logged, never fatal: the process always exits 0.
#[tokio::main]
async fn main() {
    let args = Args::parse();
    let _guard = init_tracing("logs", "organizer.log").ok();

    let organizer = FileOrganizer::new(args.output_folder);
    match organizer.organize(&args.source_folder).await {
        Ok(summary) => {
            tracing::info!(
                copied = summary.copied(),
                failed = summary.failed(),
                "Finished organizing"
            );
        }
        Err(error) => {
            tracing::error!(?error, source = %args.source_folder.display(), "Failed to organize source folder");
        }
    }
}
