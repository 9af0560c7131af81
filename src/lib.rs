// SPDX-License-Identifier: MPL-2.0
//! `neocalc_l10n` provides the localization layer of the NeoCalc
//! calculator: the shipped message catalogs (English, Italian, Brazilian
//! Portuguese, French) and the loader/resolver the application formats
//! its messages through.
//!
//! Catalogs are plain `key = value` resources with `{ $name }`
//! placeholders, loaded once at startup or on locale change and read-only
//! afterwards.

#![doc(html_root_url = "https://docs.rs/neocalc-l10n/0.1.0")]

pub mod catalog;
pub mod config;
pub mod coverage;
pub mod error;
pub mod loader;
pub mod locale;
pub mod localizer;
pub mod resource;
pub mod template;
