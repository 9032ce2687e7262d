//! Development console printer
//! Severity-tagged messages with optional call-site context, printed only in
//! debug builds and captured for inspection during test runs.

#[macro_use]
mod macros;

pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod mode;
pub mod printer;
pub mod profile;
pub mod severity;

pub use config::Config;
pub use context::CallSite;
pub use error::Error;
pub use format::format;
pub use mode::RunMode;
pub use printer::{Console, Printer, Stdout};
pub use profile::Profile;
pub use severity::Severity;
