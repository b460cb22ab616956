//! docsync CLI binary entry point.
//! Resolves settings, runs one sync and maps the outcome to an exit code.

use clap::Parser;
use docsync::cli::{normalize_args, Cli};
use docsync::config::{self, Overrides};
use docsync::sync::{self, Mode};
use docsync::{output, utils};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = docsync::logging::init() {
        eprintln!("{} {}", utils::note_prefix(), format!("logging disabled: {e}"));
    }
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let eff = match config::resolve_effective(&Overrides {
        repo_root: cli.repo_root.as_deref(),
        source: cli.source.as_deref(),
        target: cli.target.as_deref(),
        output: cli.output.as_deref(),
    }) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return ExitCode::from(2);
        }
    };
    if eff.config_file.is_none() {
        tracing::debug!("no docsync.toml found; using defaults");
    }

    let mode = if cli.check { Mode::Check } else { Mode::Write };
    let outcome = match sync::synchronize(&eff, mode) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            if eff.config_file.is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    format!(
                        "repository root resolved to {} (pass --repo-root or add docsync.toml)",
                        utils::rel_to_wd(&eff.repo_root)
                    )
                );
            }
            return ExitCode::from(2);
        }
    };
    output::print_sync(&outcome, &eff.output, cli.diff);

    // In check mode, exit non-zero when the index is stale
    if mode == Mode::Check && !outcome.in_sync() {
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
