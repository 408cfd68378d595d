use super::*;

#[test]
fn parse_backend_url_defaults_when_unset_or_blank() {
    assert_eq!(parse_backend_url(None).unwrap(), DEFAULT_BACKEND_URL);
    assert_eq!(parse_backend_url(Some("   ")).unwrap(), DEFAULT_BACKEND_URL);
}

#[test]
fn parse_backend_url_strips_trailing_slash() {
    assert_eq!(parse_backend_url(Some("https://triage.internal/")).unwrap(), "https://triage.internal");
}

#[test]
fn parse_backend_url_rejects_other_schemes() {
    assert!(matches!(parse_backend_url(Some("ftp://files")), Err(ServerError::Config(_))));
}

// Unique env var names avoid races with parallel tests.

#[test]
fn env_parse_u64_reads_value() {
    let key = "__TEST_TRIAGE_TIMEOUT_OK_311__";
    unsafe { std::env::set_var(key, " 12 ") };
    assert_eq!(env_parse_u64(key, 30), 12);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_falls_back_on_garbage_or_zero() {
    let key = "__TEST_TRIAGE_TIMEOUT_BAD_312__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse_u64(key, 30), 30);
    unsafe { std::env::set_var(key, "0") };
    assert_eq!(env_parse_u64(key, 30), 30);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_unset_uses_default() {
    assert_eq!(env_parse_u64("__TEST_TRIAGE_SURELY_UNSET_313__", 7), 7);
}
