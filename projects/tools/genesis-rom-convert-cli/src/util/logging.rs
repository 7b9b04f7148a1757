use log::LevelFilter;

/// Level selected by the `--verbose` and `--quiet` switches. `--quiet` wins over `--verbose`.
pub fn log_level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Off
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the global logger. `RUST_LOG` directives are applied on top of the switches.
pub fn init_logging(verbose: bool, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}
