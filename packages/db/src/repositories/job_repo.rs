//! Job posting repository.

use board_core::{Job, JobId, Poster};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::record_key;
use crate::{DbError, get_db};

/// Repository for job posting persistence operations.
pub struct JobRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct JobRecord {
    id: Option<Thing>,
    title: String,
    company: String,
    category: String,
    job_type: String,
    salary: u64,
    description: String,
    vacancy: u32,
    deadline: DateTime<Utc>,
    experience: String,
    poster: Poster,
    created_at: DateTime<Utc>,
}

impl JobRecord {
    fn into_job(self, id: JobId) -> Job {
        Job {
            id,
            title: self.title,
            company: self.company,
            category: self.category,
            job_type: self.job_type,
            salary: self.salary,
            description: self.description,
            vacancy: self.vacancy,
            deadline: self.deadline,
            experience: self.experience,
            poster: self.poster,
            created_at: self.created_at,
        }
    }

    /// Convert using the id stored in the record itself.
    ///
    /// Records whose key is not a valid job id are skipped.
    fn into_listed_job(self) -> Option<Job> {
        let key = record_key(self.id.as_ref());
        match JobId::parse(&key) {
            Ok(id) => Some(self.into_job(id)),
            Err(_) => {
                tracing::warn!("Skipping job record with malformed id: {}", key);
                None
            }
        }
    }
}

/// Struct for creating jobs; the id lives in the record key.
#[derive(Debug, Clone, Serialize)]
struct JobCreate {
    title: String,
    company: String,
    category: String,
    job_type: String,
    salary: u64,
    description: String,
    vacancy: u32,
    deadline: DateTime<Utc>,
    experience: String,
    poster: Poster,
    created_at: DateTime<Utc>,
}

impl From<&Job> for JobCreate {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            category: job.category.clone(),
            job_type: job.job_type.clone(),
            salary: job.salary,
            description: job.description.clone(),
            vacancy: job.vacancy,
            deadline: job.deadline,
            experience: job.experience.clone(),
            poster: job.poster.clone(),
            created_at: job.created_at,
        }
    }
}

/// Filter options for listing jobs.
#[derive(Debug, Default, Clone)]
pub struct JobFilter {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

impl JobRepository {
    /// Create a new job posting.
    pub async fn create(job: &Job) -> Result<Job, DbError> {
        let db = get_db()?;

        let record: Option<JobRecord> = db
            .create(("job", job.id.to_string()))
            .content(JobCreate::from(job))
            .await?;

        record
            .map(|r| r.into_job(job.id))
            .ok_or_else(|| DbError::Query("Failed to create job".into()))
    }

    /// Get a job by ID.
    pub async fn get(id: JobId) -> Result<Job, DbError> {
        let db = get_db()?;

        let record: Option<JobRecord> = db.select(("job", id.to_string())).await?;

        record
            .map(|r| r.into_job(id))
            .ok_or_else(|| DbError::NotFound(format!("Job not found: {}", id)))
    }

    /// List jobs with optional filtering, newest first.
    pub async fn list(filter: JobFilter) -> Result<Vec<Job>, DbError> {
        let db = get_db()?;

        let where_clause = if filter.category.is_some() {
            "WHERE category = $category"
        } else {
            ""
        };

        let limit_clause = filter
            .limit
            .map(|l| format!("LIMIT {}", l))
            .unwrap_or_default();

        let query = format!(
            "SELECT * FROM job {} ORDER BY created_at DESC {}",
            where_clause, limit_clause
        );

        let mut result = db.query(&query);

        if let Some(category) = filter.category {
            result = result.bind(("category", category));
        }

        let mut response = result.await?;
        let records: Vec<JobRecord> = response.take(0)?;

        Ok(records
            .into_iter()
            .filter_map(JobRecord::into_listed_job)
            .collect())
    }
}
