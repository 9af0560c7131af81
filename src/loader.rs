// SPDX-License-Identifier: MPL-2.0
//! Catalog loading from the embedded locale tree or a directory on disk.
//!
//! The shipped catalogs live under `locales/<locale>/main.ftl` and are
//! embedded into the binary at compile time. A host application may point
//! the loader at its own locale tree with the same layout instead.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "locales/"]
struct Locales;

/// File name of the per-locale resource inside its locale directory.
pub const RESOURCE_FILE: &str = "main.ftl";

/// Loads the embedded catalog for `locale`.
pub fn load_embedded(locale: &LanguageIdentifier) -> Result<Catalog> {
    let path = format!("{}/{}", locale, RESOURCE_FILE);
    let content = Locales::get(&path).ok_or_else(|| Error::ResourceNotFound {
        locale: locale.to_string(),
    })?;
    let source = String::from_utf8_lossy(content.data.as_ref());
    Catalog::from_source(locale.clone(), &source)
}

/// Loads `dir/<locale>/main.ftl` as a catalog.
pub fn load_from_dir(dir: &Path, locale: &LanguageIdentifier) -> Result<Catalog> {
    let path = dir.join(locale.to_string()).join(RESOURCE_FILE);
    if !path.is_file() {
        return Err(Error::ResourceNotFound {
            locale: locale.to_string(),
        });
    }
    let source = fs::read_to_string(&path)?;
    Catalog::from_source(locale.clone(), &source)
}

/// Locales shipped with the crate, sorted by tag.
pub fn available_locales() -> Vec<LanguageIdentifier> {
    let mut locales = Vec::new();
    for file in Locales::iter() {
        let filename = file.as_ref();
        if let Some(locale_str) = filename.strip_suffix(&format!("/{}", RESOURCE_FILE)) {
            if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                locales.push(locale);
            }
        }
    }
    locales.sort_by_key(|l| l.to_string());
    locales
}

/// Locales available under `dir`, sorted by tag.
///
/// A locale is any subdirectory whose name parses as a locale tag and
/// which contains a `main.ftl`. Other entries are skipped.
pub fn available_locales_in(dir: &Path) -> Result<Vec<LanguageIdentifier>> {
    let mut locales = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() || !path.join(RESOURCE_FILE).is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if let Ok(locale) = name.parse::<LanguageIdentifier>() {
                locales.push(locale);
            }
        }
    }

    locales.sort_by_key(|l| l.to_string());
    Ok(locales)
}
