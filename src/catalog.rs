// SPDX-License-Identifier: MPL-2.0
//! An immutable key → template mapping for one locale.
//!
//! A catalog is built once by the loader and never mutated afterwards, so
//! it can be shared across threads without locking.
//!
//! # Examples
//!
//! ```
//! use neocalc_l10n::catalog::Catalog;
//! use neocalc_l10n::template::Args;
//!
//! let source = "op-add = Add\nerror-undefined-variable = Undefined variable \"{ $name }\"\n";
//! let catalog = Catalog::from_source("en-US".parse().unwrap(), source).unwrap();
//!
//! assert_eq!(catalog.resolve("op-add", &Args::new()).unwrap(), "Add");
//!
//! let mut args = Args::new();
//! args.set("name", "x");
//! assert_eq!(
//!     catalog.resolve("error-undefined-variable", &args).unwrap(),
//!     "Undefined variable \"x\"",
//! );
//! ```

use crate::error::{Error, Result};
use crate::resource;
use crate::template::{Args, Template};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub struct Catalog {
    locale: LanguageIdentifier,
    templates: HashMap<String, Template>,
}

impl Catalog {
    /// Parses a full resource into a catalog for `locale`.
    ///
    /// Fails on the first malformed line or duplicate key; no partial
    /// catalog is returned.
    pub fn from_source(locale: LanguageIdentifier, source: &str) -> Result<Self> {
        let entries = resource::parse_entries(&locale.to_string(), source)?;
        let templates = entries.into_iter().collect();
        Ok(Self { locale, templates })
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Looks up `key` and renders its template with `args`.
    pub fn resolve(&self, key: &str, args: &Args) -> Result<String> {
        self.template(key)
            .ok_or_else(|| Error::MissingKey {
                locale: self.locale.to_string(),
                key: key.to_string(),
            })?
            .render(key, args)
    }

    pub fn template(&self, key: &str) -> Option<&Template> {
        self.templates.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
