use super::*;

#[test]
fn endpoint_table_matches_backend_routes() {
    assert_eq!(Endpoint::State.path(), "/api/state");
    assert_eq!(Endpoint::State.method(), Method::Get);
    assert_eq!(Endpoint::Assign.path(), "/api/assign");
    assert_eq!(Endpoint::Assign.method(), Method::Post);
    assert_eq!(Endpoint::Skip.method(), Method::Post);
    assert_eq!(Endpoint::Undo.method(), Method::Post);
    assert_eq!(Endpoint::Verify.method(), Method::Get);
    assert_eq!(Endpoint::Logout.method(), Method::Post);
    assert_eq!(Endpoint::PublicUrl.path(), "/api/public-url");
}

#[test]
fn only_login_skips_session_expiry_handling() {
    assert!(!Endpoint::Login.uses_session());
    for endpoint in [
        Endpoint::State,
        Endpoint::Assign,
        Endpoint::Skip,
        Endpoint::Undo,
        Endpoint::Verify,
        Endpoint::Logout,
        Endpoint::PublicUrl,
    ] {
        assert!(endpoint.uses_session(), "{endpoint:?}");
    }
}

#[test]
fn url_joins_without_double_slash() {
    assert_eq!(Endpoint::State.url("http://localhost:8000/"), "http://localhost:8000/api/state");
    assert_eq!(Endpoint::State.url("http://localhost:8000"), "http://localhost:8000/api/state");
    assert_eq!(Endpoint::State.url(""), "/api/state");
}

#[test]
fn join_url_adds_missing_slash() {
    assert_eq!(join_url("https://x.test", "files/1/a.txt"), "https://x.test/files/1/a.txt");
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn file_path_encodes_name() {
    assert_eq!(file_path(1233, "letter 1.pdf"), "/files/1233/letter%201.pdf");
}

#[test]
fn with_token_appends_query() {
    assert_eq!(with_token("/files/1/a.txt", Some("t0k")), "/files/1/a.txt?token=t0k");
    assert_eq!(with_token("/files/1/a.txt?x=1", Some("t0k")), "/files/1/a.txt?x=1&token=t0k");
}

#[test]
fn with_token_skips_missing_token() {
    assert_eq!(with_token("/files/1/a.txt", None), "/files/1/a.txt");
    assert_eq!(with_token("/files/1/a.txt", Some("")), "/files/1/a.txt");
}

#[test]
fn encode_component_keeps_unreserved() {
    assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
    assert_eq!(encode_component("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
}

#[test]
fn encode_component_encodes_utf8_bytes() {
    assert_eq!(encode_component("я"), "%D1%8F");
}
