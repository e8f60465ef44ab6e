//! Digest renderer.

use super::{
    format_thousands, rank_marker, truncate_description, DigestError, DigestVariant,
    NO_DATA_MESSAGE,
};
use crate::annotate::AnnotatedRepository;
use chrono::NaiveDateTime;
use handlebars::{html_escape, Handlebars};
use serde_json::{json, Value};

const VERBOSE_TEMPLATE: &str = include_str!("templates/verbose.hbs");
const COMPACT_TEMPLATE: &str = include_str!("templates/compact.hbs");

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - HTML escaping of values (the digest is sent as HTML)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Repository text is untrusted; markup lives only in the templates
    hbs.register_escape_fn(html_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renders annotated repositories into a digest body.
pub struct DigestRenderer {
    handlebars: Handlebars<'static>,
    variant: DigestVariant,
}

impl Default for DigestRenderer {
    fn default() -> Self {
        Self::new(DigestVariant::default())
    }
}

impl DigestRenderer {
    /// Creates a new renderer for the given layout.
    #[must_use]
    pub fn new(variant: DigestVariant) -> Self {
        Self {
            handlebars: create_handlebars_registry(),
            variant,
        }
    }

    /// Returns the layout this renderer produces.
    #[must_use]
    pub fn variant(&self) -> DigestVariant {
        self.variant
    }

    /// Renders the digest body.
    ///
    /// An empty list yields [`NO_DATA_MESSAGE`] with no header or footer.
    ///
    /// # Arguments
    ///
    /// * `repos` - Annotated repositories, already in display order
    /// * `now` - Timestamp shown in the header and footer
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(
        &self,
        repos: &[AnnotatedRepository],
        now: NaiveDateTime,
    ) -> Result<String, DigestError> {
        if repos.is_empty() {
            return Ok(NO_DATA_MESSAGE.to_string());
        }

        let data = self.template_data(repos, now);
        let template = match self.variant {
            DigestVariant::Verbose => VERBOSE_TEMPLATE,
            DigestVariant::Compact => COMPACT_TEMPLATE,
        };
        Ok(self.handlebars.render_template(template, &data)?)
    }

    /// Builds the template context. Display values are precomputed here so the
    /// templates stay free of logic.
    fn template_data(&self, repos: &[AnnotatedRepository], now: NaiveDateTime) -> Value {
        let max_chars = self.variant.description_limit();
        let entries: Vec<Value> = repos
            .iter()
            .enumerate()
            .map(|(i, annotated)| {
                let repo = &annotated.repository;
                json!({
                    "rank": rank_marker(i + 1),
                    "name": repo.name,
                    "tier": annotated.tier.label(),
                    "description": truncate_description(&repo.description, max_chars),
                    "language_icon": annotated.language_icon,
                    "language": repo.language,
                    "stars": format_thousands(repo.stars),
                    "forks": format_thousands(repo.forks),
                    "open_issues": repo.open_issues,
                    "url": repo.url,
                })
            })
            .collect();

        json!({
            "date": now.format("%Y-%m-%d").to_string(),
            "generated_at": now.format("%Y-%m-%d %H:%M").to_string(),
            "repos": entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate;
    use crate::source::CandidateRepository;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    fn candidate(name: &str, stars: u64, description: &str) -> CandidateRepository {
        CandidateRepository {
            name: name.to_string(),
            url: format!("https://github.com/{name}"),
            description: description.to_string(),
            language: "Rust".to_string(),
            stars,
            forks: 1_234,
            open_issues: 5,
            updated_at: "2026-10-19T07:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_input_renders_no_data_message_only() {
        let renderer = DigestRenderer::default();
        let result = renderer.render(&[], now()).unwrap();
        assert_eq!(result, NO_DATA_MESSAGE);
    }

    #[test]
    fn verbose_block_contains_fields_in_order() {
        let renderer = DigestRenderer::new(DigestVariant::Verbose);
        let repos = annotate(vec![candidate("octo/fast", 12_000, "Fast things")]);
        let result = renderer.render(&repos, now()).unwrap();

        let expected_order = [
            "🚀 2026-10-19 GitHub Trending Picks",
            "🥇 <b>octo/fast</b>",
            "🔥 Blazing",
            "Fast things",
            "🦀 Rust",
            "12,000",
            "1,234",
            "5 open issues",
            "<a href=\"https://github.com/octo/fast\">View project</a>",
            "Generated: 2026-10-19 08:30",
        ];
        let mut cursor = 0;
        for needle in expected_order {
            let found = result[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}\n{result}"));
            cursor += found + needle.len();
        }
    }

    #[test]
    fn verbose_keeps_150_chars() {
        let renderer = DigestRenderer::new(DigestVariant::Verbose);
        let description = "a".repeat(150);
        let repos = annotate(vec![candidate("octo/exact", 10, &description)]);
        let result = renderer.render(&repos, now()).unwrap();

        assert!(result.contains(&description));
        assert!(!result.contains(&format!("{description}...")));
    }

    #[test]
    fn verbose_truncates_151_chars() {
        let renderer = DigestRenderer::new(DigestVariant::Verbose);
        let description = "b".repeat(151);
        let repos = annotate(vec![candidate("octo/long", 10, &description)]);
        let result = renderer.render(&repos, now()).unwrap();

        assert!(result.contains(&format!("{}...", "b".repeat(150))));
        assert!(!result.contains(&description));
    }

    #[test]
    fn compact_truncates_at_80_chars() {
        let renderer = DigestRenderer::new(DigestVariant::Compact);
        let description = "c".repeat(81);
        let repos = annotate(vec![candidate("octo/short", 10, &description)]);
        let result = renderer.render(&repos, now()).unwrap();

        assert!(result.contains(&format!("{}...", "c".repeat(80))));
        assert!(!result.contains(&description));
        assert!(result.contains("<a href=\"https://github.com/octo/short\">octo/short</a>"));
        assert!(!result.contains("Tip:"));
    }

    #[test]
    fn ranks_follow_input_order() {
        let renderer = DigestRenderer::default();
        let repos = annotate(vec![
            candidate("octo/one", 900, "1"),
            candidate("octo/two", 800, "2"),
            candidate("octo/three", 700, "3"),
            candidate("octo/four", 600, "4"),
        ]);
        let result = renderer.render(&repos, now()).unwrap();

        let first = result.find("🥇 <b>octo/one</b>").unwrap();
        let second = result.find("🥈 <b>octo/two</b>").unwrap();
        let third = result.find("🥉 <b>octo/three</b>").unwrap();
        let fourth = result.find("4\u{fe0f}\u{20e3} <b>octo/four</b>").unwrap();
        assert!(first < second && second < third && third < fourth);
    }

    #[test]
    fn escapes_repository_text() {
        let renderer = DigestRenderer::default();
        let repos = annotate(vec![candidate("octo/xss", 10, "<script>alert(1)</script>")]);
        let result = renderer.render(&repos, now()).unwrap();

        assert!(!result.contains("<script>"));
        assert!(result.contains("&lt;script&gt;"));
    }
}
