//! Database schema definitions using SurrealQL.

use crate::{DbError, get_db};

/// Initialize the database schema.
///
/// This creates all necessary tables, fields, and indexes.
pub async fn init_schema() -> Result<(), DbError> {
    let db = get_db()?;

    tracing::info!("Initializing database schema...");

    db.query(USER_SCHEMA).await?;
    db.query(JOB_SCHEMA).await?;
    db.query(BOOKMARK_SCHEMA).await?;
    db.query(APPLICATION_SCHEMA).await?;

    tracing::info!("Database schema initialized");

    Ok(())
}

/// User table schema.
const USER_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS user SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS name ON user TYPE string;
DEFINE FIELD IF NOT EXISTS email ON user TYPE string;

DEFINE INDEX IF NOT EXISTS user_email ON user FIELDS email UNIQUE;
"#;

/// Job posting table schema.
///
/// Timestamps are stored as RFC 3339 strings written by the application.
const JOB_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS job SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS title ON job TYPE string;
DEFINE FIELD IF NOT EXISTS company ON job TYPE string;
DEFINE FIELD IF NOT EXISTS category ON job TYPE string;
DEFINE FIELD IF NOT EXISTS job_type ON job TYPE string;
DEFINE FIELD IF NOT EXISTS salary ON job TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS description ON job TYPE string DEFAULT "";
DEFINE FIELD IF NOT EXISTS vacancy ON job TYPE int DEFAULT 1;
DEFINE FIELD IF NOT EXISTS deadline ON job TYPE string;
DEFINE FIELD IF NOT EXISTS experience ON job TYPE string DEFAULT "";
DEFINE FIELD IF NOT EXISTS poster ON job TYPE object;
DEFINE FIELD IF NOT EXISTS poster.name ON job TYPE string;
DEFINE FIELD IF NOT EXISTS poster.email ON job TYPE string;
DEFINE FIELD IF NOT EXISTS created_at ON job TYPE string;

DEFINE INDEX IF NOT EXISTS job_category ON job FIELDS category;
DEFINE INDEX IF NOT EXISTS job_created ON job FIELDS created_at;
"#;

/// Bookmark table schema. A user can bookmark a job once.
const BOOKMARK_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS bookmark SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS user_id ON bookmark TYPE string;
DEFINE FIELD IF NOT EXISTS job_id ON bookmark TYPE string;
DEFINE FIELD IF NOT EXISTS created_at ON bookmark TYPE string;

DEFINE INDEX IF NOT EXISTS bookmark_user_job ON bookmark FIELDS user_id, job_id UNIQUE;
"#;

/// Application table schema.
///
/// `job` is a snapshot of the posting taken when the application was made.
const APPLICATION_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS application SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS user_id ON application TYPE string;
DEFINE FIELD IF NOT EXISTS job ON application FLEXIBLE TYPE option<object>;
DEFINE FIELD IF NOT EXISTS status ON application TYPE string DEFAULT "pending";
DEFINE FIELD IF NOT EXISTS created_at ON application TYPE string;

DEFINE INDEX IF NOT EXISTS application_user ON application FIELDS user_id;
DEFINE INDEX IF NOT EXISTS application_status ON application FIELDS status;
"#;
