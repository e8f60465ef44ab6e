//! CLI for the trending repository digest.
//!
//! Fetches repositories created in the last day that are gaining stars quickly
//! and pushes a ranked digest through the PushPlus webhook.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use trending_digest::{load_settings, DigestVariant, RunOutcome, Runner, RunnerConfig, RunnerError};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Trending Digest - Push a daily digest of fast-rising new GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// PushPlus delivery token.
    #[arg(long, env = "PUSHPLUS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to the settings file. Defaults apply when it doesn't exist.
    #[arg(long, default_value = "trending-digest.toml")]
    config: PathBuf,

    /// Digest layout, overriding the settings file.
    #[arg(long)]
    variant: Option<DigestVariant>,

    /// Print the digest instead of sending it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // rustls needs a process-wide crypto provider when more than one is compiled in
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    print_banner("Fetching trending GitHub repositories");

    // Run the main logic
    match run(args).await {
        Ok(outcome) => {
            print_summary(&outcome);
            ExitCode::from(exit_code(&outcome))
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            print_banner("✗ Run failed");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunOutcome, RunnerError> {
    let settings = load_settings(&args.config)?;
    let mut config = RunnerConfig::new(settings, args.token, args.dry_run);
    if let Some(variant) = args.variant {
        config = config.with_variant(variant);
    }
    let runner = Runner::from_config(config)?;
    Ok(runner.run().await)
}

/// Maps a run outcome to the process exit status.
fn exit_code(outcome: &RunOutcome) -> u8 {
    match outcome {
        RunOutcome::Delivered { .. } | RunOutcome::Previewed { .. } | RunOutcome::NoCandidates => 0,
        RunOutcome::FetchFailed { .. }
        | RunOutcome::RenderFailed { .. }
        | RunOutcome::DeliveryFailed { .. } => 1,
        RunOutcome::MissingToken => 2,
    }
}

/// Prints the final run summary.
fn print_summary(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Delivered { candidates } => {
            println!("✅ Pushed digest with {candidates} repositories");
            print_banner("✅ Done");
        }
        RunOutcome::Previewed { candidates } => {
            println!("Previewed digest with {candidates} repositories (dry run)");
            print_banner("✅ Done");
        }
        RunOutcome::NoCandidates => {
            println!("No trending repositories today, nothing to send");
            print_banner("✅ Done");
        }
        other => {
            println!("✗ {}", other.reason().unwrap_or("unknown failure"));
            print_banner("✗ Run failed");
        }
    }
}

fn print_banner(message: &str) {
    let rule = "=".repeat(60);
    println!("{rule}\n{message}\n{rule}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_without_arguments() {
        temp_env::with_var_unset("PUSHPLUS_TOKEN", || {
            let args = Args::try_parse_from(["trending-digest-cli"]).unwrap();
            assert_eq!(args.token, None);
            assert_eq!(args.config, PathBuf::from("trending-digest.toml"));
            assert_eq!(args.variant, None);
            assert!(!args.dry_run);
        });
    }

    #[test]
    fn token_comes_from_environment() {
        temp_env::with_var("PUSHPLUS_TOKEN", Some("from-env"), || {
            let args = Args::try_parse_from(["trending-digest-cli"]).unwrap();
            assert_eq!(args.token.as_deref(), Some("from-env"));
        });
    }

    #[test]
    fn flag_overrides_environment() {
        temp_env::with_var("PUSHPLUS_TOKEN", Some("from-env"), || {
            let args =
                Args::try_parse_from(["trending-digest-cli", "--token", "from-flag"]).unwrap();
            assert_eq!(args.token.as_deref(), Some("from-flag"));
        });
    }

    #[test]
    fn parses_variant() {
        let args = Args::try_parse_from(["trending-digest-cli", "--variant", "compact"]).unwrap();
        assert_eq!(args.variant, Some(DigestVariant::Compact));

        let result = Args::try_parse_from(["trending-digest-cli", "--variant", "tiny"]);
        assert!(result.is_err());
    }

    #[test]
    fn maps_outcomes_to_exit_codes() {
        assert_eq!(exit_code(&RunOutcome::Delivered { candidates: 3 }), 0);
        assert_eq!(exit_code(&RunOutcome::NoCandidates), 0);
        assert_eq!(
            exit_code(&RunOutcome::FetchFailed {
                reason: "timeout".to_string()
            }),
            1
        );
        assert_eq!(
            exit_code(&RunOutcome::DeliveryFailed {
                candidates: 1,
                reason: "code 903".to_string()
            }),
            1
        );
        assert_eq!(exit_code(&RunOutcome::MissingToken), 2);
    }
}
