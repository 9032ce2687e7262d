//! Call-site context appended to messages on request

/// File, function and line of the place that printed a message
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CallSite {
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        CallSite {
            file: file.into(),
            function: function.into(),
            line,
        }
    }

    /// Placeholder used by the context-less convenience entry points
    pub fn unknown() -> Self {
        CallSite::new("<unknown>", "<unknown>", 0)
    }

    /// Last component of `file`, or `file` itself when it has none
    pub fn file_name(&self) -> &str {
        std::path::Path::new(&self.file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_last_component() {
        let site = CallSite::new("Sources/App/Foo.swift", "bar()", 1);
        assert_eq!(site.file_name(), "Foo.swift");
    }

    #[test]
    fn test_file_name_without_directory() {
        let site = CallSite::new("main.rs", "main()", 1);
        assert_eq!(site.file_name(), "main.rs");
    }

    #[test]
    fn test_file_name_empty_falls_back() {
        let site = CallSite::new("", "f()", 1);
        assert_eq!(site.file_name(), "");
    }

    #[test]
    fn test_unknown() {
        let site = CallSite::unknown();
        assert_eq!(site.line, 0);
        assert_eq!(site.file, "<unknown>");
    }
}
