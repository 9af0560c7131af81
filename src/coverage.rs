// SPDX-License-Identifier: MPL-2.0
//! Translation completeness reporting.
//!
//! Every locale is expected to carry the same key set. The report
//! compares each catalog against the union of all keys and lists what is
//! missing, which is what the CLI prints and what release checks gate on.

use crate::catalog::Catalog;
use std::fmt;

#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Number of unique keys across all catalogs.
    pub total_keys: usize,
    /// Per-locale coverage, sorted by locale tag.
    pub locales: Vec<LocaleCoverage>,
}

#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    pub locale: String,
    pub present: usize,
    /// Keys from the union set this catalog lacks, sorted.
    pub missing: Vec<String>,
    pub coverage_percent: f32,
}

impl CoverageReport {
    /// Whether every locale carries every key.
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|l| l.missing.is_empty())
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} key(s) across {} locale(s)",
            self.total_keys,
            self.locales.len()
        )?;
        for coverage in &self.locales {
            write!(
                f,
                "  {:<8} {}/{} ({:.1}%)",
                coverage.locale, coverage.present, self.total_keys, coverage.coverage_percent
            )?;
            if coverage.missing.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "  missing: {}", coverage.missing.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Union of keys across catalogs, sorted and deduplicated.
pub fn all_keys<'a>(catalogs: impl IntoIterator<Item = &'a Catalog>) -> Vec<String> {
    let mut keys: Vec<String> = catalogs
        .into_iter()
        .flat_map(|catalog| catalog.keys().map(String::from))
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Compares every catalog against the union key set.
pub fn coverage_report<'a>(catalogs: impl IntoIterator<Item = &'a Catalog>) -> CoverageReport {
    let catalogs: Vec<&Catalog> = catalogs.into_iter().collect();
    let reference = all_keys(catalogs.iter().copied());
    let total = reference.len();

    let mut locales: Vec<LocaleCoverage> = catalogs
        .iter()
        .map(|catalog| {
            let missing: Vec<String> = reference
                .iter()
                .filter(|key| !catalog.contains_key(key))
                .cloned()
                .collect();
            let present = total - missing.len();
            let coverage_percent = if total == 0 {
                100.0
            } else {
                (present as f32 / total as f32) * 100.0
            };
            LocaleCoverage {
                locale: catalog.locale().to_string(),
                present,
                missing,
                coverage_percent,
            }
        })
        .collect();
    locales.sort_by(|a, b| a.locale.cmp(&b.locale));

    CoverageReport {
        total_keys: total,
        locales,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(locale: &str, source: &str) -> Catalog {
        Catalog::from_source(locale.parse().unwrap(), source).expect("parse failed")
    }

    #[test]
    fn all_keys_is_sorted_and_deduped() {
        let en = catalog("en-US", "op-add = Add\nterm-ans = ans\n");
        let fr = catalog("fr", "op-add = Addition\n");
        assert_eq!(all_keys([&en, &fr]), vec!["op-add", "term-ans"]);
    }

    #[test]
    fn all_keys_empty_input() {
        let catalogs: [&Catalog; 0] = [];
        assert!(all_keys(catalogs).is_empty());
    }

    #[test]
    fn complete_catalogs_report_full_coverage() {
        let en = catalog("en-US", "op-add = Add\nterm-ans = ans\n");
        let fr = catalog("fr", "op-add = Addition\nterm-ans = ans\n");
        let report = coverage_report([&en, &fr]);

        assert_eq!(report.total_keys, 2);
        assert!(report.is_complete());
        for coverage in &report.locales {
            assert_eq!(coverage.present, 2);
            assert!((coverage.coverage_percent - 100.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn missing_keys_are_listed_per_locale() {
        let en = catalog("en-US", "op-add = Add\nop-divide = Divide\nterm-ans = ans\n");
        let fr = catalog("fr", "op-add = Addition\n");
        let report = coverage_report([&en, &fr]);

        assert_eq!(report.total_keys, 3);
        assert!(!report.is_complete());

        let fr_coverage = report.locales.iter().find(|l| l.locale == "fr").unwrap();
        assert_eq!(fr_coverage.present, 1);
        assert_eq!(fr_coverage.missing, vec!["op-divide", "term-ans"]);
        assert!((fr_coverage.coverage_percent - 33.333_332).abs() < 0.01);
    }

    #[test]
    fn locales_are_sorted_in_report() {
        let it = catalog("it", "op-add = Addizione\n");
        let en = catalog("en-US", "op-add = Add\n");
        let fr = catalog("fr", "op-add = Addition\n");
        let report = coverage_report([&it, &en, &fr]);

        let tags: Vec<&str> = report.locales.iter().map(|l| l.locale.as_str()).collect();
        assert_eq!(tags, vec!["en-US", "fr", "it"]);
    }

    #[test]
    fn display_mentions_missing_keys() {
        let en = catalog("en-US", "op-add = Add\nterm-ans = ans\n");
        let fr = catalog("fr", "op-add = Addition\n");
        let rendered = coverage_report([&en, &fr]).to_string();

        assert!(rendered.contains("2 key(s)"));
        assert!(rendered.contains("missing: term-ans"));
    }
}
