use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_logging_off_when_nothing_set() {
    assert_eq!(filter_directives(None, None), None);
}

#[test]
fn test_rust_log_used_verbatim() {
    assert_eq!(
        filter_directives(Some("warn,fx_algo=trace"), Some("info")),
        Some("warn,fx_algo=trace".to_string())
    );
}

#[test]
fn test_fx_log_level_scoped_to_crate() {
    assert_eq!(
        filter_directives(None, Some(" trace ")),
        Some("fx_algo=trace".to_string())
    );
}

#[test]
fn test_empty_fx_log_means_debug() {
    assert_eq!(
        filter_directives(None, Some("")),
        Some(DEFAULT_FILTER.to_string())
    );
    assert_eq!(DEFAULT_FILTER, "fx_algo=debug");
}

#[test]
fn test_fx_log_directives_passed_through() {
    assert_eq!(
        filter_directives(None, Some("fx_algo=info,rayon_core=warn")),
        Some("fx_algo=info,rayon_core=warn".to_string())
    );
}
