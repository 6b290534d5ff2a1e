use std::collections::HashMap;

use pretty_assertions::assert_eq;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_is_sequential() {
    let config = ExecConfig::default();
    assert_eq!(config.backend, Backend::Sequential);
    assert_eq!(config.threads, None);
    assert_eq!(config.min_parallel_len, 1024);
}

#[test]
fn test_builders_override_fields() {
    let config = ExecConfig::default()
        .with_backend(Backend::Parallel)
        .with_threads(3)
        .with_min_parallel_len(0);
    assert_eq!(
        config,
        ExecConfig {
            backend: Backend::Parallel,
            threads: Some(3),
            min_parallel_len: 0,
        }
    );
}

#[test]
fn test_backend_parses_names() {
    assert_eq!("parallel".parse::<Backend>(), Ok(Backend::Parallel));
    assert_eq!(" PAR ".parse::<Backend>(), Ok(Backend::Parallel));
    assert_eq!("sequential".parse::<Backend>(), Ok(Backend::Sequential));
    assert_eq!("seq".parse::<Backend>(), Ok(Backend::Sequential));
}

#[test]
fn test_backend_rejects_unknown_name() {
    assert_eq!(
        "gpu".parse::<Backend>(),
        Err(AlgoError::InvalidConfig {
            key: BACKEND_VAR,
            value: "gpu".to_string(),
        })
    );
}

#[test]
fn test_lookup_with_nothing_set_keeps_defaults() {
    let config = ExecConfig::from_lookup(|_| None);
    assert_eq!(config, Ok(ExecConfig::default()));
}

#[test]
fn test_lookup_reads_every_variable() {
    let config = ExecConfig::from_lookup(lookup_from(&[
        (BACKEND_VAR, "parallel"),
        (THREADS_VAR, "4"),
        (MIN_PARALLEL_LEN_VAR, " 16 "),
    ]));
    assert_eq!(
        config,
        Ok(ExecConfig {
            backend: Backend::Parallel,
            threads: Some(4),
            min_parallel_len: 16,
        })
    );
}

#[test]
fn test_lookup_rejects_malformed_count() {
    let config = ExecConfig::from_lookup(lookup_from(&[(THREADS_VAR, "many")]));
    assert_eq!(
        config,
        Err(AlgoError::InvalidConfig {
            key: THREADS_VAR,
            value: "many".to_string(),
        })
    );
}

#[test]
fn test_lookup_rejects_zero_threads() {
    let config = ExecConfig::from_lookup(lookup_from(&[(THREADS_VAR, " 0 ")]));
    assert_eq!(
        config,
        Err(AlgoError::InvalidConfig {
            key: THREADS_VAR,
            value: " 0 ".to_string(),
        })
    );
}

#[test]
fn test_lookup_accepts_single_thread() {
    let config = ExecConfig::from_lookup(lookup_from(&[(THREADS_VAR, "1")]));
    assert_eq!(config.map(|c| c.threads), Ok(Some(1)));
}

#[test]
fn test_zero_min_parallel_len_is_allowed() {
    let config = ExecConfig::from_lookup(lookup_from(&[(MIN_PARALLEL_LEN_VAR, "0")]));
    assert_eq!(config.map(|c| c.min_parallel_len), Ok(0));
}

#[test]
fn test_invalid_config_message_names_variable() {
    let Err(err) = ExecConfig::from_lookup(lookup_from(&[(MIN_PARALLEL_LEN_VAR, "-1")])) else {
        panic!("negative length accepted");
    };
    assert_eq!(
        err.to_string(),
        "invalid value \"-1\" for FX_MIN_PARALLEL_LEN"
    );
}
