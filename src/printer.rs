//! Development console printer
//!
//! A `Printer` formats messages and routes them according to its `RunMode`:
//! printed in debug builds, kept in `last_output` during test runs, dropped
//! otherwise.

use std::cell::RefCell;
use std::io::{self, Write};

use log::trace;

use crate::config::Config;
use crate::context::CallSite;
use crate::format::format;
use crate::mode::RunMode;
use crate::profile::Profile;
use crate::severity::Severity;

/// Line-oriented output sink
pub trait Console {
    fn write_line(&self, line: &str);
}

/// Standard output sink
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn write_line(&self, line: &str) {
        let _ = writeln!(io::stdout(), "{}", line);
    }
}

/// Console printer for development builds
pub struct Printer<C: Console = Stdout> {
    profile: Profile,
    mode: RunMode,
    console: C,
    last_output: RefCell<String>,
}

impl Printer {
    /// Create new printer writing to stdout
    pub fn new(profile: Profile, mode: RunMode) -> Self {
        Printer::with_console(profile, mode, Stdout)
    }

    /// Printer configured from the loaded config
    pub fn from_config(cfg: &Config) -> Self {
        Printer::new(cfg.profile, cfg.run_mode())
    }
}

impl<C: Console> Printer<C> {
    pub fn with_console(profile: Profile, mode: RunMode, console: C) -> Self {
        Printer {
            profile,
            mode,
            console,
            last_output: RefCell::new(String::new()),
        }
    }

    /// Format and dispatch a message with any severity
    pub fn emit(
        &self,
        severity: Severity,
        message: &str,
        include_context: bool,
        site: &CallSite,
    ) {
        let output = format(self.profile, &severity, message, include_context, site);
        match self.mode {
            RunMode::Test => {
                *self.last_output.borrow_mut() = output;
            }
            RunMode::Debug => self.console.write_line(&output),
            RunMode::Release => trace!("release mode, dropped {} bytes", output.len()),
        }
    }

    /// Print success level message
    pub fn success(&self, message: &str) {
        self.success_at(message, false, &CallSite::unknown());
    }

    /// Print info level message
    pub fn info(&self, message: &str) {
        self.info_at(message, false, &CallSite::unknown());
    }

    /// Print warning level message
    pub fn warning(&self, message: &str) {
        self.warning_at(message, false, &CallSite::unknown());
    }

    /// Print error level message
    pub fn error(&self, message: &str) {
        self.error_at(message, false, &CallSite::unknown());
    }

    pub fn success_at(&self, message: &str, include_context: bool, site: &CallSite) {
        self.emit(Severity::Success, message, include_context, site);
    }

    pub fn info_at(&self, message: &str, include_context: bool, site: &CallSite) {
        self.emit(Severity::Info, message, include_context, site);
    }

    pub fn warning_at(&self, message: &str, include_context: bool, site: &CallSite) {
        self.emit(Severity::Warning, message, include_context, site);
    }

    pub fn error_at(&self, message: &str, include_context: bool, site: &CallSite) {
        self.emit(Severity::Error, message, include_context, site);
    }

    /// Last output captured in test mode, empty if none
    pub fn last_output(&self) -> String {
        self.last_output.borrow().clone()
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }
}
