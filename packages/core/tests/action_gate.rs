#![allow(clippy::disallowed_methods)]

mod common;

use board_core::{
    ApplyAffordance, BoardError, BookmarkOutcome, ToastKind, apply, apply_affordance, bookmark,
};
use common::{FakeWriter, RecordingNavigator, RecordingNotifier, job, user};

#[test]
fn apply_without_user_notifies_and_stays_put() {
    let posting = job("Rust Engineer", "engineering");
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();

    let result = apply(None, &posting.id, &notifier, &navigator);

    assert_eq!(result, Err(BoardError::Unauthenticated));
    assert_eq!(
        notifier.taken(),
        vec![(ToastKind::Error, "Please Login First".to_string())]
    );
    assert!(navigator.visits.borrow().is_empty());
}

#[test]
fn apply_with_user_opens_apply_flow() {
    let posting = job("Rust Engineer", "engineering");
    let viewer = user("viewer@example.com");
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();

    apply(Some(&viewer), &posting.id, &notifier, &navigator).unwrap();

    assert_eq!(*navigator.visits.borrow(), vec![posting.id]);
    assert!(notifier.taken().is_empty());
}

#[test]
fn own_job_is_not_offered() {
    let posting = job("Rust Engineer", "engineering");
    let poster = user(&posting.poster.email);
    let other = user("someone@example.com");

    assert_eq!(apply_affordance(Some(&poster), &posting), ApplyAffordance::OwnJob);
    assert_eq!(apply_affordance(Some(&other), &posting), ApplyAffordance::Offered);
    assert_eq!(apply_affordance(None, &posting), ApplyAffordance::Offered);
}

#[tokio::test]
async fn bookmark_without_user_makes_no_request() {
    let posting = job("Rust Engineer", "engineering");
    let writer = FakeWriter::responding(Ok(BookmarkOutcome::success("Bookmarked")));
    let notifier = RecordingNotifier::default();

    let result = bookmark(None, &posting, &writer, &notifier).await;

    assert_eq!(result, Err(BoardError::Unauthenticated));
    assert!(writer.requests.borrow().is_empty());
    assert_eq!(notifier.taken().len(), 1);
    assert_eq!(notifier.taken()[0].0, ToastKind::Error);
}

#[tokio::test]
async fn bookmark_success_shows_server_message() {
    let posting = job("Rust Engineer", "engineering");
    let viewer = user("viewer@example.com");
    let writer = FakeWriter::responding(Ok(BookmarkOutcome::success("Bookmarked")));
    let notifier = RecordingNotifier::default();

    let outcome = bookmark(Some(&viewer), &posting, &writer, &notifier)
        .await
        .unwrap();

    assert!(outcome.success);
    assert_eq!(
        notifier.taken(),
        vec![(ToastKind::Success, "Bookmarked".to_string())]
    );
    let requests = writer.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].user_id, viewer.id);
    assert_eq!(requests[0].job_id, posting.id);
}

#[tokio::test]
async fn bookmark_rejection_shows_server_message_as_error() {
    let posting = job("Rust Engineer", "engineering");
    let viewer = user("viewer@example.com");
    let writer = FakeWriter::responding(Ok(BookmarkOutcome::failure("Job Already Bookmarked")));
    let notifier = RecordingNotifier::default();

    let result = bookmark(Some(&viewer), &posting, &writer, &notifier).await;

    assert_eq!(
        result,
        Err(BoardError::WriteFailure("Job Already Bookmarked".to_string()))
    );
    assert_eq!(
        notifier.taken(),
        vec![(ToastKind::Error, "Job Already Bookmarked".to_string())]
    );
    assert_eq!(writer.requests.borrow().len(), 1);
}

#[tokio::test]
async fn bookmark_transport_failure_is_a_write_failure() {
    let posting = job("Rust Engineer", "engineering");
    let viewer = user("viewer@example.com");
    let writer = FakeWriter::responding(Err(BoardError::Network("timed out".to_string())));
    let notifier = RecordingNotifier::default();

    let result = bookmark(Some(&viewer), &posting, &writer, &notifier).await;

    assert!(matches!(result, Err(BoardError::WriteFailure(_))));
    assert_eq!(notifier.taken().len(), 1);
    assert_eq!(notifier.taken()[0].0, ToastKind::Error);
}
