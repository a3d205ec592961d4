//! Repository implementations for database operations.

mod application_repo;
mod bookmark_repo;
mod job_repo;
mod user_repo;

pub use application_repo::ApplicationRepository;
pub use bookmark_repo::BookmarkRepository;
pub use job_repo::{JobFilter, JobRepository};
pub use user_repo::UserRepository;

use surrealdb::sql::Thing;

/// Raw key of a SurrealDB record id, e.g. `01J...` for `job:01J...`.
fn record_key(id: Option<&Thing>) -> String {
    id.map(|t| t.id.to_raw()).unwrap_or_default()
}
