//! CLI argument parsing via `clap`.

use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "docsync",
    version,
    about = "Keep the documentation index in sync with the root README",
    long_about = "docsync — copy README.md into the documentation Index.md, dropping path prefixes and excluded regions.\n\nWithout flags the index is rewritten. With --check (or -check) nothing is written and the exit code is 1 when the index is stale.\n\nConfiguration precedence: CLI > docsync.toml > defaults.",
    after_help = "Examples:\n  docsync\n  docsync -check\n  docsync --check --diff\n  docsync --repo-root ../.. --output json"
)]
/// Top-level CLI options. There are no positional arguments.
pub struct Cli {
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Verify the index instead of writing it; exit 1 when stale")]
    pub check: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, requires = "check", help = "With --check, print a unified diff of the stale index")]
    pub diff: bool,
    #[arg(long, help = "Repository root (default: nearest ancestor with docsync.toml or .git)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Source file relative to the repository root (default: README.md)")]
    pub source: Option<String>,
    #[arg(long, help = "Index file relative to the repository root")]
    pub target: Option<String>,
    #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}

/// Rewrite the single-dash `-check` spelling to `--check` so clap accepts it.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|a| match a.to_str() {
            Some("-check") => OsString::from("--check"),
            Some("-diff") => OsString::from("--diff"),
            _ => a,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(args.iter().copied()))
    }

    #[test]
    fn test_default_is_write_mode() {
        let cli = parse(&["docsync"]).unwrap();
        assert!(!cli.check);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_single_dash_check_is_accepted() {
        assert!(parse(&["docsync", "-check"]).unwrap().check);
        assert!(parse(&["docsync", "--check"]).unwrap().check);
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(parse(&["docsync", "README.md"]).is_err());
    }

    #[test]
    fn test_diff_requires_check() {
        assert!(parse(&["docsync", "--diff"]).is_err());
        assert!(parse(&["docsync", "-check", "--diff"]).unwrap().diff);
    }
}
