use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cgaify::cli::{mode_listing, Cli};
use cgaify::convert::run_batch;
use retro_dither::ModeTable;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Quiet by default; RUST_LOG overrides.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cgaify=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let table = ModeTable::builtin();
    let mode = match cli.resolve_mode(&table) {
        Ok(mode) => mode,
        Err(err) => {
            // Any configuration error is fatal and gets the mode listing.
            eprintln!("cgaify: {err}");
            eprintln!();
            eprint!("{}", mode_listing());
            return ExitCode::from(2);
        }
    };

    let errors = run_batch(&cli.files, Path::new("."), &mode, cli.resize_policy());
    if errors > 0 {
        eprintln!("\nThere were {errors} errors.");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
