//! Bookmark repository.

use board_core::{BookmarkRequest, JobId, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{DbError, get_db};

/// Repository for bookmark persistence operations.
pub struct BookmarkRepository;

#[derive(Debug, Clone, Serialize)]
struct BookmarkCreate {
    user_id: String,
    job_id: String,
    created_at: DateTime<Utc>,
}

impl BookmarkRepository {
    /// Record a bookmark.
    ///
    /// Fails with [`DbError::Conflict`] if the user already bookmarked the job.
    pub async fn create(request: &BookmarkRequest) -> Result<(), DbError> {
        if Self::exists(request.user_id, request.job_id).await? {
            return Err(DbError::Conflict("Job Already Bookmarked".into()));
        }

        let db = get_db()?;
        let _: Option<serde_json::Value> = db
            .create("bookmark")
            .content(BookmarkCreate {
                user_id: request.user_id.to_string(),
                job_id: request.job_id.to_string(),
                created_at: Utc::now(),
            })
            .await?;

        Ok(())
    }

    /// Check whether a user has bookmarked a job.
    pub async fn exists(user_id: UserId, job_id: JobId) -> Result<bool, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT count() FROM bookmark WHERE user_id = $user_id AND job_id = $job_id GROUP ALL")
            .bind(("user_id", user_id.to_string()))
            .bind(("job_id", job_id.to_string()))
            .await?;

        #[derive(serde::Deserialize)]
        struct CountResult {
            count: i64,
        }

        let counts: Vec<CountResult> = result.take(0)?;

        Ok(counts.first().is_some_and(|c| c.count > 0))
    }
}
