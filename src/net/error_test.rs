use super::*;

#[test]
fn transport_message_includes_details() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.user_message(), "An error occurred: connection refused");
}

#[test]
fn application_uses_server_error_verbatim() {
    let err = ApiError::application(Some("query_text required".to_owned()));
    assert_eq!(err.user_message(), "query_text required");
}

#[test]
fn application_falls_back_to_generic_message() {
    assert_eq!(ApiError::application(None).user_message(), GENERIC_ERROR);
    assert_eq!(
        ApiError::application(Some("   ".to_owned())).user_message(),
        GENERIC_ERROR
    );
}
