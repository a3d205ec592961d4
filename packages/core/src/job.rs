//! Job posting domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a job posting, using ULID for chronological sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub Ulid);

impl JobId {
    /// Create a new unique job ID.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse a job ID from a string.
    pub fn parse(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The person who published a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poster {
    pub name: String,
    pub email: String,
}

impl Poster {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A job posting as published by the backend.
///
/// The client only ever holds read-only copies, which may be stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier for this posting.
    pub id: JobId,
    pub title: String,
    pub company: String,
    /// Category used to group related postings.
    pub category: String,
    /// Employment type, e.g. "full-time".
    pub job_type: String,
    /// Salary in whole currency units.
    pub salary: u64,
    pub description: String,
    /// Number of open positions.
    pub vacancy: u32,
    /// Last day applications are accepted.
    pub deadline: DateTime<Utc>,
    /// Required experience, free text.
    pub experience: String,
    pub poster: Poster,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Create a new posting with placeholder details.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        category: impl Into<String>,
        poster: Poster,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            title: title.into(),
            company: company.into(),
            category: category.into(),
            job_type: "full-time".to_string(),
            salary: 0,
            description: String::new(),
            vacancy: 1,
            deadline: now + chrono::Duration::days(30),
            experience: String::new(),
            poster,
            created_at: now,
        }
    }

    /// Set the salary for this posting.
    pub fn with_salary(mut self, salary: u64) -> Self {
        self.salary = salary;
        self
    }

    /// Set the employment type.
    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the number of vacancies.
    pub fn with_vacancy(mut self, vacancy: u32) -> Self {
        self.vacancy = vacancy;
        self
    }

    /// Set the application deadline.
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Set the required experience.
    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    /// Deadline formatted day first, e.g. `05/03/2024`.
    pub fn deadline_display(&self) -> String {
        crate::applied::format_day_first(&self.deadline)
    }

    /// Whether `email` belongs to the poster of this job.
    pub fn is_posted_by(&self, email: &str) -> bool {
        self.poster.email == email
    }
}
