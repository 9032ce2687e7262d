//! Error handling for the configuration surface
//! Formatting and dispatch never fail; only parsing config values does.

use std::fmt;
use std::io;

/// Custom error type
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// IO error with message
    Io(String),
    /// Unknown format profile name
    InvalidProfile(String),
    /// Unknown run mode name
    InvalidMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "IO error: {}", msg),
            Error::InvalidProfile(msg) => write!(f, "Invalid profile: {}", msg),
            Error::InvalidMode(msg) => write!(f, "Invalid mode: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
