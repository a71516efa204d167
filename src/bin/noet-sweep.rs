//! noet-sweep CLI tool
//!
//! Scans the current directory for Markdown notes that no wikilink points to, lists them, and
//! after a `y` confirmation moves them into `_TRASH/`.
//!
//! The scan root, allow-list and quarantine directory name are fixed; there are no options to
//! change them. Exit status is 0 whether orphans were moved, none were found, or the run was
//! declined. Filesystem errors exit non-zero.
//!
//! Set `RUST_LOG` (or pass `--verbose`) to see what the scan and detector are doing. Logs go to
//! stderr so they don't interleave with the prompt.

use clap::Parser;
use noet_sweep::{
    config::SweepConfig,
    console::Locale,
    sweep::{run_sweep, SweepOutcome},
};

#[derive(Parser)]
#[command(name = "noet-sweep")]
#[command(author, version, about = "Move notes that nothing links to into _TRASH", long_about = None)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SweepConfig::default().with_root(std::env::current_dir()?);
    let locale = Locale::from_env();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = run_sweep(&config, locale, &mut stdin.lock(), &mut stdout.lock())?;

    match outcome {
        SweepOutcome::NoOrphans => tracing::debug!("Nothing to do"),
        SweepOutcome::Aborted { candidates } => {
            tracing::debug!("Left {} orphaned notes in place", candidates.len())
        }
        SweepOutcome::Quarantined { moved } => tracing::info!(
            "Quarantined {} notes in {}",
            moved.len(),
            config.quarantine_dir().display()
        ),
    }

    Ok(())
}
