//! Bookmark server functions.

use board_core::{BookmarkOutcome, BookmarkRequest};
use dioxus::prelude::*;

/// Bookmark a job for a user.
///
/// Domain failures (unknown job, duplicate bookmark) come back as
/// `success: false` with a message; only transport and database errors are `Err`.
#[post("/api/bookmarks")]
pub async fn bookmark_job(request: BookmarkRequest) -> Result<BookmarkOutcome, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::DbError;
        use db::repositories::{BookmarkRepository, JobRepository};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        match JobRepository::get(request.job_id).await {
            Ok(_) => {}
            Err(DbError::NotFound(_)) => return Ok(BookmarkOutcome::failure("Job not found")),
            Err(e) => return Err(ServerFnError::new(format!("Database error: {}", e))),
        }

        match BookmarkRepository::create(&request).await {
            Ok(()) => {
                tracing::info!("User {} bookmarked job {}", request.user_id, request.job_id);
                Ok(BookmarkOutcome::success("Job Bookmarked Successfully"))
            }
            Err(DbError::Conflict(msg)) => Ok(BookmarkOutcome::failure(msg)),
            Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
        }
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
