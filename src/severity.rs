//! Severity tags and their console prefixes

/// Classification of a printed message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
    /// Caller-supplied prefix, printed verbatim
    Custom(String),
}

impl Severity {
    /// Prefix placed in front of the message
    pub fn prefix(&self) -> &str {
        match self {
            Severity::Success => "[🟢 - Success]",
            Severity::Info => "[⚪️ - Info]",
            Severity::Warning => "[🟡 - Warning]",
            Severity::Error => "[🔴 - Error]",
            Severity::Custom(label) => label,
        }
    }

    pub fn custom(label: impl Into<String>) -> Self {
        Severity::Custom(label.into())
    }
}
