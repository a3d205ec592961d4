//! Apply and bookmark actions, gated on the signed-in user.

use crate::{BoardError, BookmarkOutcome, BookmarkRequest, Job, JobId, Notifier, User};

/// Remote write for bookmarks.
#[allow(async_fn_in_trait)]
pub trait BookmarkWriter {
    async fn write_bookmark(&self, request: BookmarkRequest) -> Result<BookmarkOutcome, BoardError>;
}

/// Entry point into the apply flow, owned by the router.
pub trait ApplyNavigator {
    fn open_apply_flow(&self, job_id: &JobId);
}

/// Whether the apply button should be offered for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyAffordance {
    Offered,
    /// The viewer posted this job and cannot apply to it.
    OwnJob,
}

/// Decide at render time whether to offer the apply action.
pub fn apply_affordance(user: Option<&User>, job: &Job) -> ApplyAffordance {
    match user {
        Some(user) if job.is_posted_by(&user.email) => ApplyAffordance::OwnJob,
        _ => ApplyAffordance::Offered,
    }
}

/// Send the viewer to the apply flow, or tell them to sign in first.
pub fn apply<N, V>(
    user: Option<&User>,
    job_id: &JobId,
    notifier: &N,
    navigator: &V,
) -> Result<(), BoardError>
where
    N: Notifier + ?Sized,
    V: ApplyNavigator + ?Sized,
{
    if user.is_none() {
        let err = BoardError::Unauthenticated;
        notifier.error(&err.to_string());
        return Err(err);
    }

    navigator.open_apply_flow(job_id);
    Ok(())
}

/// Bookmark `job` for the signed-in user.
///
/// Exactly one toast is raised per call. Nothing is retried and no local
/// state changes.
pub async fn bookmark<W, N>(
    user: Option<&User>,
    job: &Job,
    writer: &W,
    notifier: &N,
) -> Result<BookmarkOutcome, BoardError>
where
    W: BookmarkWriter + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(user) = user else {
        let err = BoardError::Unauthenticated;
        notifier.error(&err.to_string());
        return Err(err);
    };

    let request = BookmarkRequest {
        user_id: user.id,
        job_id: job.id,
    };

    match writer.write_bookmark(request).await {
        Ok(outcome) if outcome.success => {
            notifier.success(&outcome.message);
            Ok(outcome)
        }
        Ok(outcome) => {
            notifier.error(&outcome.message);
            Err(BoardError::WriteFailure(outcome.message))
        }
        Err(e) => {
            tracing::warn!("Bookmark write failed for job {}: {}", job.id, e);
            let err = match e {
                BoardError::WriteFailure(msg) => BoardError::WriteFailure(msg),
                other => BoardError::WriteFailure(other.to_string()),
            };
            notifier.error(&err.to_string());
            Err(err)
        }
    }
}
