//! Format profiles: prefix table plus context template

use std::fmt;
use std::str::FromStr;

use crate::context::CallSite;
use crate::error::Error;
use crate::severity::Severity;

/// Output layout selected by configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    /// "A": `Context: [Path: <file name>, Line: <line>, Function: <function>]`
    Short,
    /// "B": `Context: [File: <file>, Function: <function>, Line: <line>]`
    #[default]
    Full,
}

impl Profile {
    pub fn prefix<'a>(&self, severity: &'a Severity) -> &'a str {
        // both profiles share the same prefix table
        severity.prefix()
    }

    pub fn render_context(&self, site: &CallSite) -> String {
        match self {
            Profile::Short => format!(
                "Context: [Path: {}, Line: {}, Function: {}]",
                site.file_name(),
                site.line,
                site.function
            ),
            Profile::Full => format!(
                "Context: [File: {}, Function: {}, Line: {}]",
                site.file, site.function, site.line
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Short => "a",
            Profile::Full => "b",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "short" => Ok(Profile::Short),
            "b" | "full" => Ok(Profile::Full),
            other => Err(Error::InvalidProfile(other.to_string())),
        }
    }
}
