use super::*;

fn status(is_complete: bool, answer_text: Option<&str>) -> QueryStatusResponse {
    QueryStatusResponse {
        is_complete,
        answer_text: answer_text.map(ToOwned::to_owned),
        error: None,
    }
}

#[test]
fn incomplete_status_continues_polling() {
    assert_eq!(classify_status(status(false, None)), PollStep::Continue);
    // answer_text before completion is ignored, not shown early.
    assert_eq!(
        classify_status(status(false, Some("partial"))),
        PollStep::Continue
    );
}

#[test]
fn complete_status_yields_answer_text() {
    assert_eq!(
        classify_status(status(true, Some("# Try Sushi Nakazawa"))),
        PollStep::Complete("# Try Sushi Nakazawa".to_owned())
    );
}

#[test]
fn complete_status_without_answer_falls_back_to_placeholder() {
    assert_eq!(
        classify_status(status(true, None)),
        PollStep::Complete(NO_DATA_PLACEHOLDER.to_owned())
    );
    assert_eq!(
        classify_status(status(true, Some(""))),
        PollStep::Complete(NO_DATA_PLACEHOLDER.to_owned())
    );
}

#[test]
fn default_settings_match_backend_pacing() {
    let settings = PollSettings::default();
    assert_eq!(settings.interval_ms, 2000);
    assert_eq!(settings.max_attempts, 150);
}

#[test]
fn timed_out_message_names_the_attempt_count() {
    assert_eq!(
        timed_out_message(150),
        "An error occurred: no answer after 150 status checks"
    );
}
