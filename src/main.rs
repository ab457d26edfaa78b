//! # PNG Optimizer - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing` (su stderr)
//! - Validazione della directory di input
//! - Creazione della configurazione e avvio dell'optimizer
//!
//! ## Exit code:
//! - `0`: scansione completata, anche se alcuni file sono falliti
//! - `1`: argomenti errati o directory inesistente
//!
//! ## Esempio di utilizzo:
//! ```bash
//! png-optimizer /path/to/images --verbose
//! ```

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use png_optimizer::{Config, PngOptimizer, Reporter};

#[derive(Parser)]
#[command(name = "png-optimizer", version)]
#[command(about = "Losslessly re-encode every PNG under a directory, in place")]
struct Args {
    /// Directory to scan recursively for PNG files
    directory: PathBuf,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors exit with 1, not clap's default 2
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config {
        root: args.directory,
        follow_links: args.follow_links,
    };

    let optimizer = PngOptimizer::new(config)?;
    optimizer.run(&mut Reporter::stdout()).await?;

    Ok(())
}
