//! Orchestrates a digest run: fetch, annotate, format, deliver.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::annotate::{annotate, AnnotatedRepository};
use crate::digest::{digest_title, DigestRenderer};
use crate::notify::{DeliveryStatus, Notifier, PushPlusNotifier};
use crate::source::{FetchOutcome, SourceClient, TrendingSource};
use crate::summary::RunOutcome;
use chrono::{Local, NaiveDateTime};
use tracing::{error, info, warn};

/// Runs the pipeline once against a source and an optional notifier.
pub struct Runner<S, N> {
    config: RunnerConfig,
    source: S,
    notifier: Option<N>,
    renderer: DigestRenderer,
}

impl Runner<SourceClient, PushPlusNotifier> {
    /// Builds a runner with the GitHub search client and, when a token is
    /// configured, the PushPlus notifier.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if either HTTP client can't be constructed.
    pub fn from_config(config: RunnerConfig) -> Result<Self, RunnerError> {
        let source = SourceClient::new(config.settings().search.clone())?;
        let notifier = config
            .token()
            .map(|token| PushPlusNotifier::new(token.to_string(), &config.settings().notify))
            .transpose()?;
        Ok(Self::new(config, source, notifier))
    }
}

impl<S, N> Runner<S, N>
where
    S: TrendingSource,
    N: Notifier,
{
    /// Creates a runner from already constructed parts.
    ///
    /// Without a notifier, only dry runs can complete.
    pub fn new(config: RunnerConfig, source: S, notifier: Option<N>) -> Self {
        let renderer = DigestRenderer::new(config.variant());
        Self {
            config,
            source,
            notifier,
            renderer,
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Returns the notifier, if one was configured.
    pub fn notifier(&self) -> Option<&N> {
        self.notifier.as_ref()
    }

    /// Executes the full pipeline, stamped with the current local time.
    pub async fn run(&self) -> RunOutcome {
        self.run_at(Local::now().naive_local()).await
    }

    /// Executes the full pipeline with `now` as the digest timestamp.
    pub async fn run_at(&self, now: NaiveDateTime) -> RunOutcome {
        let notifier = match (&self.notifier, self.config.dry_run()) {
            (Some(notifier), false) => Some(notifier),
            (_, true) => None,
            (None, false) => {
                error!("PUSHPLUS_TOKEN is not set, skipping run");
                return RunOutcome::MissingToken;
            }
        };

        info!("Fetching trending repositories");
        let candidates = match self.source.fetch_recent_trending().await {
            FetchOutcome::Fetched(repos) => repos,
            FetchOutcome::Failed { reason } => {
                error!(error = %reason, "No data fetched");
                return RunOutcome::FetchFailed { reason };
            }
        };

        if candidates.is_empty() {
            info!("No trending repositories found");
            return RunOutcome::NoCandidates;
        }

        let repos = annotate(candidates);
        log_candidates(&repos);

        let body = match self.renderer.render(&repos, now) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Failed to render digest");
                return RunOutcome::RenderFailed {
                    reason: e.to_string(),
                };
            }
        };
        let title = digest_title(now);

        let Some(notifier) = notifier else {
            print_preview(&title, &body);
            return RunOutcome::Previewed {
                candidates: repos.len(),
            };
        };

        info!(variant = %self.renderer.variant(), "Sending digest");
        match notifier.send(&title, &body).await {
            DeliveryStatus::Delivered => RunOutcome::Delivered {
                candidates: repos.len(),
            },
            failed => {
                let reason = failed.failure_reason().unwrap_or_default();
                warn!(error = %reason, "Digest delivery failed");
                RunOutcome::DeliveryFailed {
                    candidates: repos.len(),
                    reason,
                }
            }
        }
    }
}

fn log_candidates(repos: &[AnnotatedRepository]) {
    info!(count = repos.len(), "Fetched trending repositories");
    for annotated in repos {
        info!(
            repo = %annotated.repository.name,
            stars = annotated.repository.stars,
            tier = %annotated.tier,
            "Candidate"
        );
    }
}

fn print_preview(title: &str, body: &str) {
    println!("\n[DRY RUN] {title}");
    for line in body.lines() {
        println!("  {line}");
    }
    println!();
}
