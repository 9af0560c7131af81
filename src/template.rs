// SPDX-License-Identifier: MPL-2.0
//! Message templates and their runtime arguments.
//!
//! A template is a localized value pre-split at load time into literal
//! text and `{ $name }` placeholders. Rendering substitutes each
//! placeholder with a caller-supplied argument.

use crate::error::{Error, Result};

/// Named arguments supplied at format time.
///
/// Argument order is irrelevant; setting the same name twice replaces the
/// earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    values: Vec<(String, String)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a named argument, replacing any previous value for the name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.values.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.values.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A compiled message value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a raw value into segments.
    ///
    /// Returns a human-readable reason on placeholder syntax errors; the
    /// caller attaches locale and line context.
    pub(crate) fn parse(value: &str) -> std::result::Result<Self, String> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = value.chars();

        while let Some(ch) = chars.next() {
            if ch != '{' {
                literal.push(ch);
                continue;
            }

            let mut inner = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                inner.push(c);
            }
            if !closed {
                return Err("unclosed placeholder (missing `}`)".to_string());
            }

            let inner = inner.trim();
            let Some(name) = inner.strip_prefix('$') else {
                return Err(format!(
                    "placeholder `{{{}}}` must reference a named argument like {{ $name }}",
                    inner
                ));
            };
            let name = name.trim();
            if !is_identifier(name) {
                return Err(format!("invalid placeholder name `{}`", name));
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name.to_string()));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Renders the template, substituting every placeholder.
    ///
    /// `key` only feeds error reporting. Arguments not referenced by the
    /// template are ignored; a placeholder with no matching argument fails
    /// with [`Error::MissingArgument`].
    pub fn render(&self, key: &str, args: &Args) -> Result<String> {
        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Placeholder(name) => match args.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(Error::MissingArgument {
                            key: key.to_string(),
                            placeholder: name.clone(),
                        })
                    }
                },
            }
        }
        Ok(result)
    }

    /// Renders leniently: placeholders without a matching argument are
    /// left in their literal `{ $name }` form instead of failing.
    pub fn render_lossy(&self, args: &Args) -> String {
        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Placeholder(name) => match args.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        result.push_str("{ $");
                        result.push_str(name);
                        result.push_str(" }");
                    }
                },
            }
        }
        result
    }

    /// Names of the placeholders referenced by this template, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

/// An identifier is an ASCII letter followed by letters, digits, `_` or `-`.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
