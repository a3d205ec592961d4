//! Job applications and bookmarks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::{Job, JobId, UserId};

/// Unique identifier for an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub Ulid);

impl ApplicationId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn parse(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for ApplicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review status of an application.
///
/// The backend may add statuses at any time, so unknown values are kept
/// verbatim in [`ApplicationStatus::Other`] instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Other(String),
}

impl ApplicationStatus {
    /// Status string as stored by the backend.
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => ApplicationStatus::Pending,
            "approved" => ApplicationStatus::Approved,
            "rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Other(s),
        }
    }
}

impl From<&str> for ApplicationStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's application to a job.
///
/// Created by the backend when a user applies; never mutated on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub user_id: UserId,
    /// Snapshot of the job at listing time. Absent if the posting was removed.
    #[serde(default)]
    pub job: Option<Job>,
    #[serde(default)]
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// Create a new pending application for `job`.
    pub fn new(user_id: UserId, job: Job) -> Self {
        Self {
            id: ApplicationId::new(),
            user_id,
            job: Some(job),
            status: ApplicationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<ApplicationStatus>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Request pairing a user with the job they want to bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRequest {
    pub user_id: UserId,
    pub job_id: JobId,
}

/// Outcome of a bookmark write, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkOutcome {
    pub success: bool,
    pub message: String,
}

impl BookmarkOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn unknown_status_is_preserved() {
        let status: ApplicationStatus = serde_json::from_str("\"shortlisted\"").unwrap();
        assert_eq!(status, ApplicationStatus::Other("shortlisted".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"shortlisted\"");
    }

    #[test]
    fn known_statuses_decode() {
        let approved: ApplicationStatus = serde_json::from_str("\"approved\"").unwrap();
        let rejected: ApplicationStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(approved, ApplicationStatus::Approved);
        assert_eq!(rejected, ApplicationStatus::Rejected);
    }
}
