//! Run mode resolved once at the entry boundary

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Where printed output goes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Print to the console
    Debug,
    /// Drop everything
    Release,
    /// Keep the last output for inspection, never print
    Test,
}

impl RunMode {
    /// Combine the two environment facts. A test run wins over a debug build.
    pub fn from_flags(is_test: bool, is_debug: bool) -> Self {
        if is_test {
            RunMode::Test
        } else if is_debug {
            RunMode::Debug
        } else {
            RunMode::Release
        }
    }

    /// Mode implied by how this binary was built
    pub fn for_build() -> Self {
        Self::from_flags(false, cfg!(debug_assertions))
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            RunMode::Debug => "debug",
            RunMode::Release => "release",
            RunMode::Test => "test",
        };
        f.write_str(s)
    }
}

impl FromStr for RunMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "dev" => Ok(RunMode::Debug),
            "release" | "prod" => Ok(RunMode::Release),
            "test" => Ok(RunMode::Test),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}
