// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Deck(DeckError),
}

/// Specific error types for slide deck loading issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum DeckError {
    /// The given path is not a readable directory.
    DirectoryUnreadable(String),

    /// The directory contains no supported image files.
    NoSlides(String),

    /// An embedded demo asset is missing or unreadable.
    MissingAsset(String),
}

impl DeckError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DeckError::DirectoryUnreadable(_) => "error-deck-directory-unreadable",
            DeckError::NoSlides(_) => "error-deck-no-slides",
            DeckError::MissingAsset(_) => "error-deck-missing-asset",
        }
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::DirectoryUnreadable(path) => {
                write!(f, "Cannot read slide directory: {}", path)
            }
            DeckError::NoSlides(path) => {
                write!(f, "No supported images found in: {}", path)
            }
            DeckError::MissingAsset(name) => write!(f, "Missing embedded slide: {}", name),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Deck(e) => write!(f, "Deck Error: {}", e),
        }
    }
}

impl From<DeckError> for Error {
    fn from(err: DeckError) -> Self {
        Error::Deck(err)
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
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn deck_error_display_includes_path() {
        let err = DeckError::NoSlides("/tmp/empty".to_string());
        assert!(format!("{}", err).contains("/tmp/empty"));
    }

    #[test]
    fn deck_error_i18n_keys() {
        assert_eq!(
            DeckError::DirectoryUnreadable(String::new()).i18n_key(),
            "error-deck-directory-unreadable"
        );
        assert_eq!(
            DeckError::NoSlides(String::new()).i18n_key(),
            "error-deck-no-slides"
        );
        assert_eq!(
            DeckError::MissingAsset(String::new()).i18n_key(),
            "error-deck-missing-asset"
        );
    }

    #[test]
    fn deck_error_converts_to_crate_error() {
        let err: Error = DeckError::NoSlides("x".into()).into();
        assert!(matches!(err, Error::Deck(DeckError::NoSlides(_))));
    }
}
