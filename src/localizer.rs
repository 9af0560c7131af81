// SPDX-License-Identifier: MPL-2.0
//! The message-formatting service used by the host application.
//!
//! A [`Localizer`] loads every available catalog up front, picks the
//! active locale, and exposes both a lenient lookup (`tr`, `tr_with`)
//! that always yields something displayable and a strict one (`resolve`)
//! that surfaces lookup and formatting errors.
//!
//! Lookups walk the active locale first, then the default locale. After
//! construction the service is read-only; switching locales requires
//! exclusive access.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::loader;
use crate::locale;
use crate::template::Args;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(Debug)]
pub struct Localizer {
    catalogs: HashMap<LanguageIdentifier, Catalog>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Localizer {
    /// Builds a localizer over the embedded catalogs.
    ///
    /// The active locale is resolved from the CLI argument, the config
    /// file, and the OS locale, in that order.
    pub fn new(cli_lang: Option<&str>, config: &Config) -> Result<Self> {
        let available = loader::available_locales();
        let mut catalogs = HashMap::new();
        for locale in &available {
            catalogs.insert(locale.clone(), loader::load_embedded(locale)?);
        }
        Self::with_catalogs(catalogs, available, cli_lang, config)
    }

    /// Builds a localizer over an on-disk locale tree.
    ///
    /// The tree must provide a catalog for the default locale, which
    /// serves as the fallback for every other locale.
    pub fn from_dir(dir: &Path, cli_lang: Option<&str>, config: &Config) -> Result<Self> {
        let available = loader::available_locales_in(dir)?;
        let mut catalogs = HashMap::new();
        for locale in &available {
            catalogs.insert(locale.clone(), loader::load_from_dir(dir, locale)?);
        }
        Self::with_catalogs(catalogs, available, cli_lang, config)
    }

    fn with_catalogs(
        catalogs: HashMap<LanguageIdentifier, Catalog>,
        available_locales: Vec<LanguageIdentifier>,
        cli_lang: Option<&str>,
        config: &Config,
    ) -> Result<Self> {
        let default_locale = locale::default_locale();
        if !catalogs.contains_key(&default_locale) {
            return Err(Error::ResourceNotFound {
                locale: default_locale.to_string(),
            });
        }
        let current_locale = locale::resolve_locale(cli_lang, config, &available_locales);
        Ok(Self {
            catalogs,
            available_locales,
            current_locale,
            default_locale,
        })
    }

    /// Switches the active locale. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.catalogs.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn catalog(&self, locale: &LanguageIdentifier) -> Option<&Catalog> {
        self.catalogs.get(locale)
    }

    /// All loaded catalogs, in no particular order.
    pub fn catalogs(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.values()
    }

    /// Strict lookup: resolves `key` in the active locale, falling back
    /// to the default locale when the key is absent there.
    pub fn resolve(&self, key: &str, args: &Args) -> Result<String> {
        if let Some(catalog) = self.lookup(key) {
            return catalog.resolve(key, args);
        }
        Err(Error::MissingKey {
            locale: self.current_locale.to_string(),
            key: key.to_string(),
        })
    }

    /// Lenient lookup without arguments. See [`Localizer::tr_with`].
    pub fn tr(&self, key: &str) -> String {
        self.tr_with(key, &Args::new())
    }

    /// Lenient lookup: never fails.
    ///
    /// Falls back to the default locale for missing keys, leaves
    /// unmatched placeholders in literal form, and yields the raw key
    /// when no catalog knows it.
    pub fn tr_with(&self, key: &str, args: &Args) -> String {
        match self.lookup(key).and_then(|catalog| catalog.template(key)) {
            Some(template) => template.render_lossy(args),
            None => key.to_string(),
        }
    }

    fn lookup(&self, key: &str) -> Option<&Catalog> {
        let current = self.catalogs.get(&self.current_locale);
        if let Some(catalog) = current {
            if catalog.contains_key(key) {
                return Some(catalog);
            }
        }
        let fallback = self.catalogs.get(&self.default_locale)?;
        if fallback.contains_key(key) {
            return Some(fallback);
        }
        None
    }
}
