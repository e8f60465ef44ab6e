//! Language display glyphs.

/// Glyph for languages missing from [`LANGUAGE_ICONS`].
pub const DEFAULT_LANGUAGE_ICON: &str = "💻";

/// Known language names and their glyphs. Matched exactly.
pub const LANGUAGE_ICONS: [(&str, &str); 13] = [
    ("Python", "🐍"),
    ("JavaScript", "⚡"),
    ("TypeScript", "📘"),
    ("Java", "☕"),
    ("Go", "🐹"),
    ("Rust", "🦀"),
    ("C++", "⚙️"),
    ("HTML", "🌐"),
    ("CSS", "🎨"),
    ("PHP", "🐘"),
    ("Ruby", "💎"),
    ("Swift", "🍎"),
    ("Kotlin", "🤖"),
];

/// Returns the glyph for a language name (case-sensitive).
#[must_use]
pub fn language_icon(language: &str) -> &'static str {
    LANGUAGE_ICONS
        .iter()
        .find(|(name, _)| *name == language)
        .map_or(DEFAULT_LANGUAGE_ICON, |(_, icon)| *icon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::UNKNOWN_LANGUAGE;

    #[test]
    fn known_languages() {
        assert_eq!(language_icon("Rust"), "🦀");
        assert_eq!(language_icon("Python"), "🐍");
        assert_eq!(language_icon("C++"), "⚙️");
    }

    #[test]
    fn unknown_languages_fall_back() {
        assert_eq!(language_icon("COBOL"), DEFAULT_LANGUAGE_ICON);
        assert_eq!(language_icon(UNKNOWN_LANGUAGE), DEFAULT_LANGUAGE_ICON);
        assert_eq!(language_icon(""), DEFAULT_LANGUAGE_ICON);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(language_icon("rust"), DEFAULT_LANGUAGE_ICON);
        assert_eq!(language_icon("RUST"), DEFAULT_LANGUAGE_ICON);
    }
}
