// SPDX-License-Identifier: MPL-2.0
//! Line-oriented parsing of locale resource files.
//!
//! The grammar is deliberately small:
//!
//! - lines whose first non-blank character is `#` are comments or section
//!   headers and are skipped,
//! - blank lines are skipped,
//! - every other line must read `key = value`, where `value` is non-empty
//!   and may embed `{ $name }` placeholders.
//!
//! Parsing is all-or-nothing: the first offending line fails the whole
//! resource, so a catalog is never observable in a partially loaded state.

use crate::error::{Error, Result};
use crate::template::{is_identifier, Template};
use std::collections::HashSet;

/// Parses one resource into `(key, template)` entries, in file order.
pub(crate) fn parse_entries(locale: &str, source: &str) -> Result<Vec<(String, Template)>> {
    let mut entries = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::Malformed {
                locale: locale.to_string(),
                line: line_number,
                reason: "expected `key = value`".to_string(),
            });
        };

        let key = key.trim();
        let value = value.trim();

        if !is_identifier(key) {
            return Err(Error::Malformed {
                locale: locale.to_string(),
                line: line_number,
                reason: format!("invalid message key `{}`", key),
            });
        }
        if value.is_empty() {
            return Err(Error::Malformed {
                locale: locale.to_string(),
                line: line_number,
                reason: format!("empty value for key `{}`", key),
            });
        }
        if !seen.insert(key.to_string()) {
            return Err(Error::DuplicateKey {
                locale: locale.to_string(),
                line: line_number,
                key: key.to_string(),
            });
        }

        let template = Template::parse(value).map_err(|reason| Error::Malformed {
            locale: locale.to_string(),
            line: line_number,
            reason,
        })?;
        entries.push((key.to_string(), template));
    }

    Ok(entries)
}
