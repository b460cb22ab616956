//! Output rendering for sync results.
//!
//! Supports `human` (default) and `json` outputs. Human output is silent for
//! an up-to-date check so CI logs stay clean.

use crate::sync::{Mode, SyncOutcome};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use similar::TextDiff;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// One-line diagnostic for a stale index.
pub fn stale_message(target: &str) -> String {
    format!("{target} is not up to date. Run docsync without -check to update it.")
}

/// Print a sync outcome in the requested format.
pub fn print_sync(outcome: &SyncOutcome, output: &str, diff: bool) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_sync_json(outcome, diff)) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("{} {e}", crate::utils::error_prefix()),
        },
        _ => {
            let color = use_colors(output);
            match outcome.mode {
                Mode::Write => {
                    if outcome.changed {
                        if color {
                            println!(
                                "{} {} -> {}",
                                "📥 synced:".green().bold(),
                                outcome.source,
                                outcome.target.bold()
                            );
                        } else {
                            println!("📥 synced: {} -> {}", outcome.source, outcome.target);
                        }
                    } else if color {
                        println!("{} {}", "no changes:".bright_black(), outcome.target);
                    } else {
                        println!("no changes: {}", outcome.target);
                    }
                }
                Mode::Check => {
                    if outcome.in_sync() {
                        return;
                    }
                    println!("{}", stale_message(&outcome.target));
                    if diff {
                        if let Some(d) = build_diff(outcome) {
                            if color {
                                print!("{}", d.cyan());
                            } else {
                                print!("{d}");
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Unified diff from the current target to the expected text.
fn build_diff(outcome: &SyncOutcome) -> Option<String> {
    let current = outcome.current.as_deref()?;
    let diff = TextDiff::from_lines(current, outcome.expected.as_str());
    Some(
        diff.unified_diff()
            .context_radius(3)
            .header(&outcome.target, "expected")
            .to_string(),
    )
}

/// Compose the sync JSON object (pure) for testing purposes.
pub fn compose_sync_json(outcome: &SyncOutcome, diff: bool) -> JsonVal {
    let mut out = json!({
        "mode": outcome.mode,
        "source": outcome.source,
        "target": outcome.target,
        "changed": outcome.changed,
        "wrote": outcome.wrote,
        "in_sync": outcome.in_sync(),
    });
    if diff && !outcome.in_sync() {
        out["diff"] = json!(build_diff(outcome));
    }
    if !outcome.in_sync() {
        out["message"] = json!(stale_message(&outcome.target));
    }
    out
}
