use crate::Cli;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// The level the logger is installed with, plus a warning to emit once the
/// logger is up if `LOG_LEVEL` held something unrecognized.
///
/// `--quiet` and `-v`/`-vv` win over `LOG_LEVEL`.
pub(crate) fn resolve_log_level(
    verbosity: u8,
    quiet: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if quiet {
        return (tracing::Level::WARN, None);
    }

    match verbosity {
        0 => (),
        1 => return (tracing::Level::DEBUG, None),
        _ => return (tracing::Level::TRACE, None),
    }

    match env_val.map(str::trim) {
        None | Some("") => (DEFAULT_LOG_LEVEL, None),
        Some(level) => match level.to_ascii_lowercase().as_str() {
            "warn" => (tracing::Level::WARN, None),
            "info" => (tracing::Level::INFO, None),
            "debug" | "verbose" => (tracing::Level::DEBUG, None),
            "trace" => (tracing::Level::TRACE, None),
            _ => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{level}`"
                )),
            ),
        },
    }
}

/// Logs go to stderr so that a generated module printed to stdout can be
/// piped straight into a file.
pub(crate) fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) =
        resolve_log_level(cli.verbose, cli.quiet, env_val.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(log_level >= tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
