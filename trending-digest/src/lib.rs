#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod annotate;
pub mod config;
pub mod digest;
pub mod notify;
pub mod runner;
pub mod source;
pub mod summary;

pub use annotate::{annotate, language_icon, tier_label, AnnotatedRepository, Tier};
pub use config::{load_settings, ConfigError, Settings};
pub use digest::{digest_title, format_digest, DigestError, DigestRenderer, DigestVariant};
pub use notify::{DeliveryStatus, Notifier, NotifyError, PushPlusNotifier};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use source::{
    build_search_query, CandidateRepository, FetchOutcome, SourceClient, SourceError,
    TrendingSource,
};
pub use summary::RunOutcome;
