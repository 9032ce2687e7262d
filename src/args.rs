use std::path::PathBuf;

use devprint::{Error, Profile, RunMode};

#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub profile: Option<Profile>,
    pub mode: Option<RunMode>,
    pub context: bool,
    pub verbosity: u8,
    pub config_path: Option<PathBuf>,
}

/// Value of `--flag value` or `--flag=value`
fn flag_value<I: Iterator<Item = String>>(s: &str, flag: &str, iter: &mut I) -> Option<String> {
    if s == flag {
        iter.next()
    } else {
        s.find('=').map(|eq| s[eq + 1..].to_string())
    }
}

/// Parse CLI args: --profile <a|b>, --mode <debug|release|test>, --context, --config <path>, -v
fn parse_cli_args_from<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, Error> {
    let mut cli = CliArgs::default();
    let mut iter = args.into_iter();
    while let Some(a) = iter.next() {
        match a.as_str() {
            "--context" => cli.context = true,
            s if s.starts_with("-v") && s.chars().skip(1).all(|c| c == 'v') => {
                let count = s.chars().skip(1).count();
                // bound verbosity at 3
                cli.verbosity = std::cmp::min(3, count as u8);
            }
            "--verbose" => {
                cli.verbosity = std::cmp::max(cli.verbosity, 1);
            }
            s if s.starts_with("--profile") => {
                if let Some(v) = flag_value(s, "--profile", &mut iter) {
                    cli.profile = Some(v.parse()?);
                }
            }
            s if s.starts_with("--mode") => {
                if let Some(v) = flag_value(s, "--mode", &mut iter) {
                    cli.mode = Some(v.parse()?);
                }
            }
            s if s.starts_with("--config") => {
                if let Some(p) = flag_value(s, "--config", &mut iter) {
                    if !p.is_empty() {
                        cli.config_path = Some(PathBuf::from(p));
                    }
                }
            }
            _ => {}
        }
    }
    Ok(cli)
}

pub fn parse_cli_args() -> Result<CliArgs, Error> {
    parse_cli_args_from(std::env::args())
}

#[cfg(test)]
mod tests {
    use devprint::Config;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("prog")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_cli_args_from_flags() {
        let tmp = std::env::temp_dir().join(format!(
            "devprint_cli_cfg_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let _ = std::fs::create_dir_all(&tmp);
        let cfg_path = tmp.join("cli_cfg");
        std::fs::write(&cfg_path, "PROFILE=a\nINCLUDE_CONTEXT=true\n").unwrap();

        let cfg_str = cfg_path.to_string_lossy().to_string();
        let cli = parse_cli_args_from(args(&[
            "--context",
            "--mode",
            "test",
            "--config",
            cfg_str.as_str(),
        ]))
        .unwrap();
        assert!(cli.context);
        assert_eq!(cli.mode, Some(RunMode::Test));
        assert_eq!(cli.profile, None);
        assert_eq!(cli.config_path, Some(cfg_path.clone()));

        // ensure the Config::load uses this file when provided
        let loaded = Config::load(cli.config_path.clone());
        assert_eq!(loaded.profile, Profile::Short);
        assert!(loaded.include_context);
    }

    #[test]
    fn test_parse_cli_args_from_flags_eq_form() {
        let cli = parse_cli_args_from(args(&["--profile=b", "--mode=release", "--config=/x/y"]))
            .unwrap();
        assert_eq!(cli.profile, Some(Profile::Full));
        assert_eq!(cli.mode, Some(RunMode::Release));
        assert_eq!(cli.config_path, Some(PathBuf::from("/x/y")));
        assert!(!cli.context);
    }

    #[test]
    fn test_parse_cli_args_empty_config_ignored() {
        let cli = parse_cli_args_from(args(&["--config="])).unwrap();
        assert_eq!(cli.config_path, None);
    }

    #[test]
    fn test_parse_cli_args_invalid_profile() {
        let err = parse_cli_args_from(args(&["--profile", "z"])).unwrap_err();
        assert_eq!(err, Error::InvalidProfile("z".to_string()));
    }

    #[test]
    fn test_parse_cli_args_invalid_mode() {
        let err = parse_cli_args_from(args(&["--mode=staging"])).unwrap_err();
        assert_eq!(err, Error::InvalidMode("staging".to_string()));
    }

    #[test]
    fn test_parse_cli_args_verbosity() {
        assert_eq!(parse_cli_args_from(args(&["-v"])).unwrap().verbosity, 1);
        assert_eq!(parse_cli_args_from(args(&["-vv"])).unwrap().verbosity, 2);
        assert_eq!(parse_cli_args_from(args(&["-vvvvv"])).unwrap().verbosity, 3);
        assert_eq!(parse_cli_args_from(args(&["--verbose"])).unwrap().verbosity, 1);
    }
}
