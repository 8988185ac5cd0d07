use super::*;
use crate::net::error::GENERIC_ERROR;

fn config() -> ApiConfig {
    ApiConfig::new(Some("http://127.0.0.1:8000"), Some("tok")).expect("config")
}

#[test]
fn extract_query_id_returns_usable_id() {
    let body = SubmitQueryResponse {
        query_id: Some("abc123".to_owned()),
        error: None,
    };
    assert_eq!(extract_query_id(body), Ok("abc123".to_owned()));
}

#[test]
fn extract_query_id_rejects_missing_id_with_generic_message() {
    let body = SubmitQueryResponse::default();
    assert_eq!(
        extract_query_id(body),
        Err(ApiError::Application(GENERIC_ERROR.to_owned()))
    );
}

#[test]
fn extract_query_id_rejects_blank_id_and_prefers_server_error() {
    let body = SubmitQueryResponse {
        query_id: Some("  ".to_owned()),
        error: Some("backend overloaded".to_owned()),
    };
    assert_eq!(
        extract_query_id(body),
        Err(ApiError::Application("backend overloaded".to_owned()))
    );
}

#[test]
fn submit_and_status_urls_come_from_config() {
    let cfg = config();
    assert_eq!(cfg.submit_url(), "http://127.0.0.1:8000/submit_query");
    assert_eq!(
        cfg.status_url("xyz"),
        "http://127.0.0.1:8000/get_query/xyz"
    );
}
