use crate::logging::resolve_log_level;
use tracing::Level;

#[test]
fn defaults_to_info() {
    assert_eq!(resolve_log_level(0, false, None), (Level::INFO, None));
    assert_eq!(resolve_log_level(0, false, Some("  ")), (Level::INFO, None));
}

#[test]
fn verbosity_flags_override_log_level_env() {
    assert_eq!(resolve_log_level(1, false, Some("warn")), (Level::DEBUG, None));
    assert_eq!(resolve_log_level(2, false, Some("warn")), (Level::TRACE, None));
    assert_eq!(resolve_log_level(0, true, Some("trace")), (Level::WARN, None));
}

#[test]
fn log_level_env_is_case_insensitive() {
    assert_eq!(resolve_log_level(0, false, Some("DEBUG")), (Level::DEBUG, None));
    assert_eq!(resolve_log_level(0, false, Some(" Trace ")), (Level::TRACE, None));
    assert_eq!(resolve_log_level(0, false, Some("verbose")), (Level::DEBUG, None));
}

#[test]
fn unrecognized_log_level_env_warns() {
    let (level, warning) = resolve_log_level(0, false, Some("loud"));
    assert_eq!(level, Level::INFO);
    assert_eq!(
        warning.as_deref(),
        Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
    );
}
