//! Simple config file parsing helpers
//!
//! Supports reading simple KEY=VALUE pairs from a config file (shell-style
//! comments with #). Loads environment variables first and then overlays the
//! values from a config file if present.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::mode::RunMode;
use crate::profile::Profile;

pub const DEFAULT_CONFIG_PATH: &str = "./etc/devprint/config.default";
pub const SYSTEM_CONFIG_PATH: &str = "/etc/devprint/config";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub profile: Profile,
    /// Explicit mode; when unset it is derived from `test` and the build type
    pub mode: Option<RunMode>,
    pub test: bool,
    pub include_context: bool,
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn parse_value_map(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(eq) = line.find('=') {
            let key = line[..eq].trim().to_string();
            let val = line[eq + 1..].trim().to_string();
            map.insert(key, val);
        }
    }
    map
}

impl Config {
    /// Load config by overlaying env variables with values from config file.
    /// If `path` is None, we try repo-local `./etc/devprint/config.default` first,
    /// then `/etc/devprint/config`.
    pub fn load(path: Option<PathBuf>) -> Self {
        let mut cfg = Config::default();

        if let Ok(v) = std::env::var("DEVPRINT_PROFILE") {
            cfg.set_profile(&v);
        }
        if let Ok(v) = std::env::var("DEVPRINT_MODE") {
            cfg.set_mode(&v);
        }
        if let Ok(v) = std::env::var("DEVPRINT_TEST") {
            cfg.test = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("DEVPRINT_CONTEXT") {
            cfg.include_context = parse_bool(&v);
        }

        let cfg_path = if let Some(p) = path {
            p
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            PathBuf::from(DEFAULT_CONFIG_PATH)
        } else {
            PathBuf::from(SYSTEM_CONFIG_PATH)
        };

        match fs::read_to_string(&cfg_path) {
            Ok(content) => {
                debug!("config: reading {}", cfg_path.display());
                cfg.apply(&content);
            }
            Err(e) => debug!("config: skipping {}: {}", cfg_path.display(), e),
        }

        cfg
    }

    /// Overlay values from KEY=VALUE content
    pub fn apply(&mut self, content: &str) {
        let map = parse_value_map(content);
        if let Some(v) = map.get("PROFILE") {
            self.set_profile(v);
        }
        if let Some(v) = map.get("MODE") {
            self.set_mode(v);
        }
        if let Some(v) = map.get("TEST") {
            self.test = parse_bool(v);
        }
        if let Some(v) = map.get("INCLUDE_CONTEXT") {
            self.include_context = parse_bool(v);
        }
    }

    fn set_profile(&mut self, v: &str) {
        match v.parse() {
            Ok(p) => self.profile = p,
            Err(e) => warn!("config: {}, keeping profile {}", e, self.profile),
        }
    }

    fn set_mode(&mut self, v: &str) {
        match v.parse() {
            Ok(m) => self.mode = Some(m),
            Err(e) => warn!("config: {}, ignoring", e),
        }
    }

    /// Explicit mode if set, otherwise test flag first, then build type
    pub fn run_mode(&self) -> RunMode {
        self.mode
            .unwrap_or_else(|| RunMode::from_flags(self.test, cfg!(debug_assertions)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn tmp_file(name: &str, content: &str) -> PathBuf {
        let tmp = env::temp_dir().join(format!(
            "devprint_cfg_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let _ = fs::create_dir_all(&tmp);
        let cfg_file = tmp.join("cfg");
        fs::write(&cfg_file, content).unwrap();
        cfg_file
    }

    #[test]
    fn test_parse_value_map() {
        let map = parse_value_map("# comment\n\nPROFILE = a\nMODE=test\nbroken line\n");
        assert_eq!(map.get("PROFILE").unwrap(), "a");
        assert_eq!(map.get("MODE").unwrap(), "test");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_apply_overlays_values() {
        let mut cfg = Config::default();
        cfg.apply("PROFILE=short\nMODE=release\nINCLUDE_CONTEXT=yes\n");
        assert_eq!(cfg.profile, Profile::Short);
        assert_eq!(cfg.mode, Some(RunMode::Release));
        assert!(cfg.include_context);
    }

    #[test]
    fn test_apply_invalid_values_keep_defaults() {
        let mut cfg = Config::default();
        cfg.apply("PROFILE=zzz\nMODE=staging\n");
        assert_eq!(cfg.profile, Profile::Full);
        assert_eq!(cfg.mode, None);
    }

    #[test]
    fn test_load_from_file() {
        let path = tmp_file("load", "PROFILE=a\nMODE=test\n");
        let cfg = Config::load(Some(path));
        assert_eq!(cfg.profile, Profile::Short);
        assert_eq!(cfg.run_mode(), RunMode::Test);
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let path = env::temp_dir().join("devprint_cfg_does_not_exist/cfg");
        let cfg = Config::load(Some(path));
        assert_eq!(cfg.mode, None);
    }

    #[test]
    fn test_run_mode_test_flag() {
        let cfg = Config {
            test: true,
            ..Default::default()
        };
        assert_eq!(cfg.run_mode(), RunMode::Test);
    }

    #[test]
    fn test_run_mode_explicit_wins() {
        let cfg = Config {
            test: true,
            mode: Some(RunMode::Debug),
            ..Default::default()
        };
        assert_eq!(cfg.run_mode(), RunMode::Debug);
    }

    #[test]
    fn test_run_mode_follows_build() {
        let cfg = Config::default();
        assert_eq!(cfg.run_mode(), RunMode::for_build());
    }
}
