//! End-to-end submission scenarios against mock collaborators.

use lookup_core::{ErrorKind, NETWORK_UNAVAILABLE_MESSAGE, Submission, ValidationReason};
use lookup_test::MockCollaborators;

const COMPANY_NAMES: &[&str] = &["Acme", "a", " ", "Globex Corporation", "株式会社", "O'Reilly"];

#[tokio::test]
async fn empty_input_is_rejected() {
    let mocks = MockCollaborators::new("", true);

    let submission = mocks.workflow().on_submit().await.unwrap();

    assert_eq!(
        submission,
        Submission::Rejected {
            reason: ValidationReason::Empty
        }
    );
    assert_eq!(mocks.fetcher.call_count(), 0);
    assert_eq!(mocks.notifier.reasons(), vec![ValidationReason::Empty]);
}

#[tokio::test]
async fn empty_input_skips_network_check() {
    for available in [true, false] {
        let mocks = MockCollaborators::new("", available);

        let submission = mocks.workflow().on_submit().await.unwrap();

        assert!(submission.is_rejected());
        assert_eq!(mocks.network.call_count(), 0);
        assert_eq!(mocks.fetcher.call_count(), 0);
    }
}

#[tokio::test]
async fn unavailable_network_is_an_error() {
    let mocks = MockCollaborators::new("Acme", false);

    let error = mocks.workflow().on_submit().await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::NetworkUnavailable);
    assert_eq!(
        error.message(),
        Some("You don't have a network connection to access this data.")
    );
    assert_eq!(mocks.fetcher.call_count(), 0);
    assert_eq!(mocks.notifier.call_count(), 0);
}

#[tokio::test]
async fn available_network_fetches_once() {
    let mocks = MockCollaborators::new("Acme", true);

    let submission = mocks.workflow().on_submit().await.unwrap();

    assert_eq!(
        submission,
        Submission::Fetched {
            company: "Acme".to_owned()
        }
    );
    assert_eq!(mocks.fetcher.calls(), vec!["Acme".to_owned()]);
    assert_eq!(mocks.notifier.call_count(), 0);
}

#[tokio::test]
async fn non_empty_inputs_follow_network_state() {
    for name in COMPANY_NAMES {
        let offline = MockCollaborators::new(*name, false);
        let error = offline.workflow().on_submit().await.unwrap_err();
        assert_eq!(error.message(), Some(NETWORK_UNAVAILABLE_MESSAGE));
        assert_eq!(offline.fetcher.call_count(), 0);

        let online = MockCollaborators::new(*name, true);
        assert!(online.workflow().on_submit().await.unwrap().is_fetched());
        assert_eq!(online.fetcher.calls(), vec![(*name).to_owned()]);
    }
}

#[tokio::test]
async fn each_submission_queries_collaborators_again() {
    let mocks = MockCollaborators::new("Acme", true);
    let workflow = mocks.workflow();

    workflow.on_submit().await.unwrap();
    workflow.on_submit().await.unwrap();

    assert_eq!(mocks.input.call_count(), 2);
    assert_eq!(mocks.network.call_count(), 2);
    assert_eq!(mocks.fetcher.call_count(), 2);
}
