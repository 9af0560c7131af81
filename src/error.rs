// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// No resource exists for the requested locale.
    ResourceNotFound { locale: String },
    /// A resource line violates the `key = value` grammar.
    Malformed {
        locale: String,
        line: usize,
        reason: String,
    },
    /// The same key appears twice within one resource.
    DuplicateKey {
        locale: String,
        line: usize,
        key: String,
    },
    /// A lookup referenced a key absent from the catalog.
    MissingKey { locale: String, key: String },
    /// A template placeholder had no matching runtime argument.
    MissingArgument { key: String, placeholder: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::ResourceNotFound { locale } => {
                write!(f, "No resource found for locale '{}'", locale)
            }
            Error::Malformed {
                locale,
                line,
                reason,
            } => write!(
                f,
                "Malformed resource for locale '{}', line {}: {}",
                locale, line, reason
            ),
            Error::DuplicateKey { locale, line, key } => write!(
                f,
                "Duplicate key '{}' in locale '{}', line {}",
                key, locale, line
            ),
            Error::MissingKey { locale, key } => {
                write!(f, "Missing key '{}' in locale '{}'", key, locale)
            }
            Error::MissingArgument { key, placeholder } => write!(
                f,
                "Missing argument '{}' formatting message '{}'",
                placeholder, key
            ),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn display_formats_malformed_with_line() {
        let err = Error::Malformed {
            locale: "en-US".to_string(),
            line: 7,
            reason: "expected `key = value`".to_string(),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("en-US"));
        assert!(rendered.contains("line 7"));
    }

    #[test]
    fn display_formats_missing_argument() {
        let err = Error::MissingArgument {
            key: "error-undefined-variable".to_string(),
            placeholder: "name".to_string(),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("'name'"));
        assert!(rendered.contains("error-undefined-variable"));
    }
}
