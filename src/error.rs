// SPDX-License-Identifier: MPL-2.0
use crate::showcase::ShowcaseError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Showcase(ShowcaseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Showcase(e) => write!(f, "Showcase Error: {}", e),
        }
    }
}

impl From<ShowcaseError> for Error {
    fn from(err: ShowcaseError) -> Self {
        Error::Showcase(err)
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
    fn from_showcase_error_produces_showcase_variant() {
        let err: Error = ShowcaseError::IndexOutOfRange { index: 4, len: 3 }.into();
        assert!(format!("{}", err).contains("out of range"));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
