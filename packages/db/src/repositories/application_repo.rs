//! Application repository.

use board_core::{Application, ApplicationId, ApplicationStatus, Job, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::record_key;
use crate::{DbError, get_db};

/// Repository for application persistence operations.
pub struct ApplicationRepository;

#[derive(Debug, Deserialize)]
struct ApplicationRecord {
    id: Option<Thing>,
    user_id: UserId,
    #[serde(default)]
    job: Option<Job>,
    status: ApplicationStatus,
    created_at: DateTime<Utc>,
}

impl ApplicationRecord {
    fn into_application(self, id: ApplicationId) -> Application {
        Application {
            id,
            user_id: self.user_id,
            job: self.job,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ApplicationCreate {
    user_id: String,
    job: Option<Job>,
    status: ApplicationStatus,
    created_at: DateTime<Utc>,
}

impl ApplicationRepository {
    /// Store a new application.
    pub async fn create(application: &Application) -> Result<Application, DbError> {
        let db = get_db()?;

        let record: Option<ApplicationRecord> = db
            .create(("application", application.id.to_string()))
            .content(ApplicationCreate {
                user_id: application.user_id.to_string(),
                job: application.job.clone(),
                status: application.status.clone(),
                created_at: application.created_at,
            })
            .await?;

        record
            .map(|r| r.into_application(application.id))
            .ok_or_else(|| DbError::Query("Failed to create application".into()))
    }

    /// Applications made by a user, newest first.
    pub async fn list_for_user(user_id: UserId) -> Result<Vec<Application>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM application WHERE user_id = $user_id ORDER BY created_at DESC")
            .bind(("user_id", user_id.to_string()))
            .await?;

        let records: Vec<ApplicationRecord> = result.take(0)?;

        Ok(records
            .into_iter()
            .filter_map(|r| {
                let key = record_key(r.id.as_ref());
                match ApplicationId::parse(&key) {
                    Ok(id) => Some(r.into_application(id)),
                    Err(_) => {
                        tracing::warn!("Skipping application record with malformed id: {}", key);
                        None
                    }
                }
            })
            .collect())
    }
}
