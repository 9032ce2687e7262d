//! Demo for the development console printer
//! Prints one line per severity, plus a custom one, using the configured
//! profile and run mode.

mod args;

use log::{LevelFilter, debug, error};

use devprint::{Config, Printer, Severity, call_site};

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = match args::parse_cli_args() {
        Ok(cli) => cli,
        Err(e) => {
            env_logger::Builder::new()
                .filter_level(LevelFilter::Error)
                .init();
            error!("{}", e);
            std::process::exit(2);
        }
    };

    env_logger::Builder::new()
        .filter_level(level_for(cli.verbosity))
        .parse_default_env()
        .init();

    // CLI values override env vars and config file
    let mut cfg = Config::load(cli.config_path.clone());
    if let Some(p) = cli.profile {
        cfg.profile = p;
    }
    if let Some(m) = cli.mode {
        cfg.mode = Some(m);
    }
    let include_context = cli.context || cfg.include_context;

    debug!("cfg.profile={}", cfg.profile);
    debug!("cfg.mode={:?}", cfg.mode);
    debug!("cfg.test={}", cfg.test);
    debug!("derived.run_mode={}", cfg.run_mode());
    debug!("derived.include_context={}", include_context);

    let printer = Printer::from_config(&cfg);
    let site = call_site!();

    printer.success_at("Operation completed successfully", include_context, &site);
    printer.info_at("Fetching remote configuration", include_context, &site);
    printer.warning_at("Cache is almost full", include_context, &site);
    printer.error_at("Network request failed", include_context, &site);
    printer.emit(
        Severity::custom("[🟣 - Notice]"),
        "Custom severity event",
        include_context,
        &site,
    );

    let captured = printer.last_output();
    if !captured.is_empty() {
        println!("captured: {}", captured);
    }
}
