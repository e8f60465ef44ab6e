//! Repository search using the GitHub Search API.
//!
//! Issues a single query for repositories created in the last few days with
//! more than a minimum number of stars, sorted by stars, one page only.

mod error;
mod repository;
mod status;

pub use error::SourceError;
pub use repository::{CandidateRepository, DESCRIPTION_PLACEHOLDER, UNKNOWN_LANGUAGE};
pub use status::FetchOutcome;

use crate::config::SearchSettings;
use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use octocrab::Octocrab;
use reqwest::header::{ACCEPT, USER_AGENT};
use repository::{into_candidates, SearchResponse};
use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};

/// Media type for the v3 REST API.
const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Repository search route, relative to the API base.
const SEARCH_ROUTE: &str = "/search/repositories";

/// A source of trending repository candidates.
#[async_trait]
pub trait TrendingSource: Send + Sync {
    /// Fetches recently created repositories ordered by descending stars.
    async fn fetch_recent_trending(&self) -> FetchOutcome;
}

/// Query string parameters for the repository search.
#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    sort: &'static str,
    order: &'static str,
    per_page: u8,
}

/// Unauthenticated GitHub search client.
#[derive(Clone)]
pub struct SourceClient {
    octocrab: Octocrab,
    settings: SearchSettings,
}

impl SourceClient {
    /// Builds a client for the configured API base, with the configured
    /// identification header and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the base URI is invalid or the HTTP client
    /// can't be constructed.
    pub fn new(settings: SearchSettings) -> Result<Self, SourceError> {
        let octocrab = Octocrab::builder()
            .base_uri(settings.api_base.as_str())?
            .add_header(USER_AGENT, settings.user_agent.clone())
            .add_header(ACCEPT, GITHUB_JSON_MEDIA_TYPE.to_string())
            .set_connect_timeout(Some(settings.timeout()))
            .set_read_timeout(Some(settings.timeout()))
            .build()?;

        Ok(Self { octocrab, settings })
    }

    /// Fetches repositories created since `created_within_days` before today.
    ///
    /// Never returns an error: failures are logged and reported as
    /// [`FetchOutcome::Failed`], which reads as an empty result.
    pub async fn fetch_recent_trending(&self) -> FetchOutcome {
        let today = Local::now().date_naive();
        let since = created_since(today, self.settings.created_within_days);
        self.fetch_created_since(since).await
    }

    /// Fetches repositories created on or after `since`.
    pub async fn fetch_created_since(&self, since: NaiveDate) -> FetchOutcome {
        let query = build_search_query(self.settings.min_stars, since);
        let span = info_span!("fetch", query = %query);

        async {
            match self.search(&query).await {
                Ok(repos) => {
                    info!(count = repos.len(), "Search complete");
                    FetchOutcome::Fetched(repos)
                }
                Err(e) => {
                    warn!(error = %e, "Failed to fetch trending repositories");
                    FetchOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Executes the search request and converts the single result page.
    async fn search(&self, query: &str) -> Result<Vec<CandidateRepository>, SourceError> {
        let params = SearchParams {
            q: query,
            sort: "stars",
            order: "desc",
            per_page: self.settings.per_page,
        };
        debug!(per_page = params.per_page, "Executing repository search");

        let response: SearchResponse = self.octocrab.get(SEARCH_ROUTE, Some(&params)).await?;
        Ok(into_candidates(response, usize::from(self.settings.per_page)))
    }
}

#[async_trait]
impl TrendingSource for SourceClient {
    async fn fetch_recent_trending(&self) -> FetchOutcome {
        SourceClient::fetch_recent_trending(self).await
    }
}

/// Returns the earliest creation date to include.
#[must_use]
pub fn created_since(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Builds a repository search query.
///
/// Format: `stars:>{min_stars} created:>={YYYY-MM-DD}`
#[must_use]
pub fn build_search_query(min_stars: u32, since: NaiveDate) -> String {
    format!("stars:>{min_stars} created:>={}", since.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_build_search_query() {
        let query = build_search_query(10, date(2026, 10, 18));
        assert_eq!(query, "stars:>10 created:>=2026-10-18");
    }

    #[test]
    fn test_created_since_one_day() {
        assert_eq!(created_since(date(2026, 10, 19), 1), date(2026, 10, 18));
    }

    #[test]
    fn test_created_since_crosses_month_and_year() {
        assert_eq!(created_since(date(2026, 3, 1), 1), date(2026, 2, 28));
        assert_eq!(created_since(date(2026, 1, 1), 1), date(2025, 12, 31));
    }

    #[test]
    fn test_search_params_serialization() {
        let params = SearchParams {
            q: "stars:>10 created:>=2026-10-18",
            sort: "stars",
            order: "desc",
            per_page: 10,
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["sort"], "stars");
        assert_eq!(value["order"], "desc");
        assert_eq!(value["per_page"], 10);
    }
}
