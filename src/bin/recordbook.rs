//! recordbook Binary
//!
//! Starts the interactive record book on stdin/stdout.

use std::io;

use clap::Parser;
use recordbook::config::DEFAULT_DATA_FILE;
use recordbook::{Config, Console, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// recordbook
#[derive(Parser, Debug)]
#[command(name = "recordbook")]
#[command(about = "Console record book for student academic records")]
#[command(version)]
struct Args {
    /// Data file the records are loaded from and saved to
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data_file: String,
}

fn main() {
    // Logs go to stderr so they never mix with the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("recordbook v{}", recordbook::VERSION);
    tracing::info!("Data file: {}", args.data_file);

    let config = Config::builder().data_file(&args.data_file).build();

    // Load existing records; a missing file starts an empty book
    let mut store = Store::new();
    match store.load(&config.data_file) {
        Ok(report) if report.file_found => {
            println!("Existing data loaded ({} records).", report.loaded);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Failed to load {}: {}", config.data_file.display(), e);
            std::process::exit(1);
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(store, config, stdin.lock(), stdout.lock());

    if let Err(e) = console.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
