use super::*;

#[test]
fn submit_request_serializes_query_text_field() {
    let body = SubmitQueryRequest {
        query_text: "sushi near Times Square".to_owned(),
    };
    let json = serde_json::to_value(&body).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "query_text": "sushi near Times Square" })
    );
}

#[test]
fn submit_response_parses_query_id() {
    let resp: SubmitQueryResponse =
        serde_json::from_str(r#"{"query_id":"abc123","queued_at":"2026-01-01"}"#).expect("parse");
    assert_eq!(resp.query_id.as_deref(), Some("abc123"));
    assert!(resp.error.is_none());
}

#[test]
fn submit_response_tolerates_empty_body() {
    let resp: SubmitQueryResponse = serde_json::from_str("{}").expect("parse");
    assert!(resp.query_id.is_none());
    assert!(resp.error.is_none());
}

#[test]
fn status_response_defaults_to_incomplete() {
    let resp: QueryStatusResponse = serde_json::from_str("{}").expect("parse");
    assert!(!resp.is_complete);
    assert!(resp.answer_text.is_none());
}

#[test]
fn status_response_parses_completed_answer() {
    let resp: QueryStatusResponse =
        serde_json::from_str(r##"{"is_complete":true,"answer_text":"# Try Sushi Nakazawa"}"##)
            .expect("parse");
    assert!(resp.is_complete);
    assert_eq!(resp.answer_text.as_deref(), Some("# Try Sushi Nakazawa"));
}

#[test]
fn error_bodies_parse_on_both_response_types() {
    let submit: SubmitQueryResponse =
        serde_json::from_str(r#"{"error":"query_text required"}"#).expect("parse");
    assert_eq!(submit.error.as_deref(), Some("query_text required"));

    let status: QueryStatusResponse =
        serde_json::from_str(r#"{"error":"unknown query"}"#).expect("parse");
    assert_eq!(status.error.as_deref(), Some("unknown query"));
}
