// SPDX-License-Identifier: MPL-2.0
//! Locale selection: normalization, matching, and resolution order.

use crate::config::Config;
use unic_langid::LanguageIdentifier;

pub const DEFAULT_LOCALE: &str = "en-US";

pub fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap()
}

/// Maps platform spellings such as `pt_BR` or `pt_BR.UTF-8` onto BCP 47
/// tags before parsing.
pub fn normalize(tag: &str) -> String {
    let tag = tag.trim();
    let tag = tag.split('.').next().unwrap_or(tag);
    tag.replace('_', "-")
}

/// Finds the best available locale for a raw tag.
///
/// Tries an exact match first, then a language-only match (`pt` selects
/// `pt-BR`). Returns `None` for unparsable tags or when nothing matches.
pub fn best_match(tag: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let candidate: LanguageIdentifier = normalize(tag).parse().ok()?;
    if available.contains(&candidate) {
        return Some(candidate);
    }
    available
        .iter()
        .find(|locale| locale.language == candidate.language)
        .cloned()
}

/// Picks the active locale.
///
/// Precedence: CLI argument, then the config file, then the OS locale,
/// then the built-in default. Candidates that are unparsable or not
/// available are skipped.
pub fn resolve_locale(
    cli_lang: Option<&str>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> LanguageIdentifier {
    // 1. Check CLI args
    if let Some(locale) = cli_lang.and_then(|tag| best_match(tag, available)) {
        return locale;
    }

    // 2. Check config file
    if let Some(locale) = config
        .language
        .as_deref()
        .and_then(|tag| best_match(tag, available))
    {
        return locale;
    }

    // 3. Check OS locale
    if let Some(locale) = sys_locale::get_locale()
        .as_deref()
        .and_then(|tag| best_match(tag, available))
    {
        return locale;
    }

    default_locale()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped() -> Vec<LanguageIdentifier> {
        ["en-US", "fr", "it", "pt-BR"]
            .iter()
            .map(|tag| tag.parse().unwrap())
            .collect()
    }

    #[test]
    fn normalize_handles_posix_spellings() {
        assert_eq!(normalize("pt_BR"), "pt-BR");
        assert_eq!(normalize("pt_BR.UTF-8"), "pt-BR");
        assert_eq!(normalize(" fr "), "fr");
    }

    #[test]
    fn best_match_exact() {
        let found = best_match("fr", &shipped()).unwrap();
        assert_eq!(found.to_string(), "fr");
    }

    #[test]
    fn best_match_language_only() {
        let found = best_match("pt", &shipped()).unwrap();
        assert_eq!(found.to_string(), "pt-BR");

        let found = best_match("en-GB", &shipped()).unwrap();
        assert_eq!(found.to_string(), "en-US");
    }

    #[test]
    fn best_match_rejects_unknown_and_garbage() {
        assert!(best_match("de", &shipped()).is_none());
        assert!(best_match("not a tag!", &shipped()).is_none());
    }

    #[test]
    fn cli_takes_precedence_over_config() {
        let config = Config {
            language: Some("it".to_string()),
        };
        let locale = resolve_locale(Some("fr"), &config, &shipped());
        assert_eq!(locale.to_string(), "fr");
    }

    #[test]
    fn config_is_used_when_cli_is_absent() {
        let config = Config {
            language: Some("it".to_string()),
        };
        let locale = resolve_locale(None, &config, &shipped());
        assert_eq!(locale.to_string(), "it");
    }

    #[test]
    fn unavailable_cli_locale_falls_through_to_config() {
        let config = Config {
            language: Some("pt_BR".to_string()),
        };
        let locale = resolve_locale(Some("de"), &config, &shipped());
        assert_eq!(locale.to_string(), "pt-BR");
    }
}
