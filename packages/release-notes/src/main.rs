//! Release notes CLI
//!
//! Prints the changelog section for a release tag, typically as the body of
//! a GitHub release:
//!
//! ```text
//! release-notes --tag v1.2.3 -o notes.md
//! release-notes -i - --tag v1.2.3 -o - < CHANGELOG.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use release_notes::stdio::{read_changelog, write_notes};
use release_notes::{extract_from_str, version_from_tag, Endpoint};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "release-notes")]
#[command(about = "Extract the changelog section for a release tag")]
#[command(version)]
struct Cli {
    /// Changelog to read (`-` for stdin)
    #[arg(short, long, default_value = "CHANGELOG.md")]
    input: PathBuf,

    /// Release tag, e.g. v1.2.3 (one leading `v` is dropped)
    #[arg(long)]
    tag: String,

    /// Where to write the notes (`-` for stdout)
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never end up in notes written to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let input = Endpoint::from_path(&cli.input);
    let output = Endpoint::from_path(&cli.output);

    let changelog = read_changelog(&input).context("Could not load changelog")?;

    let version = version_from_tag(&cli.tag);
    debug!(tag = %cli.tag, version, "Resolved version from tag");

    let notes = extract_from_str(&changelog, version);
    if notes.is_empty() {
        warn!(tag = %cli.tag, %input, "No changelog section matches this tag");
    }

    write_notes(&output, &notes).context("Could not save release notes")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_defaults_to_changelog() {
        let cli = Cli::try_parse_from(["release-notes", "--tag", "v1.0.0", "-o", "-"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("CHANGELOG.md"));
        assert_eq!(cli.tag, "v1.0.0");
        assert_eq!(Endpoint::from_path(&cli.output), Endpoint::Stdio);
    }

    #[test]
    fn test_long_and_short_flags() {
        let cli = Cli::try_parse_from([
            "release-notes",
            "--input",
            "docs/CHANGES.md",
            "--tag",
            "2.0.0",
            "--output",
            "notes.md",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("docs/CHANGES.md"));
        assert_eq!(cli.output, PathBuf::from("notes.md"));

        let cli =
            Cli::try_parse_from(["release-notes", "-i", "-", "--tag", "2.0.0", "-o", "out.md"])
                .unwrap();
        assert!(Endpoint::from_path(&cli.input).is_stdio());
    }

    #[test]
    fn test_tag_is_required() {
        let err = Cli::try_parse_from(["release-notes", "-o", "-"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_output_is_required() {
        let err = Cli::try_parse_from(["release-notes", "--tag", "v1.0.0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("CHANGELOG.md");
        let output = dir.path().join("notes.md");
        std::fs::write(&input, "## 1.2.3\n\nFixed bug A\n\n## 1.2.2\n\nOlder notes\n").unwrap();

        let cli = Cli {
            input,
            tag: "v1.2.3".to_string(),
            output: output.clone(),
        };
        run(&cli).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "## 1.2.3\n\nFixed bug A"
        );
    }

    #[test]
    fn test_run_fails_on_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            input: dir.path().join("nope.md"),
            tag: "v1.0.0".to_string(),
            output: dir.path().join("notes.md"),
        };

        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("nope.md"));
        assert!(!dir.path().join("notes.md").exists());
    }
}
