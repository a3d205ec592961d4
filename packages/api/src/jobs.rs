//! Job posting server functions.

use board_core::Job;
use dioxus::prelude::*;

/// Get a job by ID. `None` if no such posting exists.
#[get("/api/jobs/:id")]
pub async fn get_job(id: String) -> Result<Option<Job>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use board_core::JobId;
        use db::DbError;
        use db::repositories::JobRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let Ok(job_id) = JobId::parse(&id) else {
            return Ok(None);
        };

        match JobRepository::get(job_id).await {
            Ok(job) => Ok(Some(job)),
            Err(DbError::NotFound(_)) => Ok(None),
            Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
        }
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List job postings, newest first.
#[get("/api/jobs")]
pub async fn list_jobs(
    category: Option<String>,
    limit: Option<usize>,
) -> Result<Vec<Job>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::{JobFilter, JobRepository};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let filter = JobFilter {
            category,
            limit: Some(limit.unwrap_or(100)),
            ..Default::default()
        };

        JobRepository::list(filter)
            .await
            .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
