//! User repository.

use board_core::{User, UserId};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::record_key;
use crate::{DbError, get_db};

/// Repository for user persistence operations.
pub struct UserRepository;

#[derive(Debug, Deserialize)]
struct UserRecord {
    id: Option<Thing>,
    name: String,
    email: String,
}

impl UserRecord {
    fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct UserCreate {
    name: String,
    email: String,
}

impl UserRepository {
    /// Create a new user. Emails are unique.
    pub async fn create(user: &User) -> Result<User, DbError> {
        let db = get_db()?;

        let record: Option<UserRecord> = db
            .create(("user", user.id.to_string()))
            .content(UserCreate {
                name: user.name.clone(),
                email: user.email.clone(),
            })
            .await?;

        record
            .map(|r| r.into_user(user.id))
            .ok_or_else(|| DbError::Query("Failed to create user".into()))
    }

    /// Look a user up by email.
    pub async fn find_by_email(email: &str) -> Result<Option<User>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;

        let records: Vec<UserRecord> = result.take(0)?;

        let Some(record) = records.into_iter().next() else {
            return Ok(None);
        };

        let key = record_key(record.id.as_ref());
        let id = UserId::parse(&key)
            .map_err(|e| DbError::Serialization(format!("Invalid user id {}: {}", key, e)))?;
        Ok(Some(record.into_user(id)))
    }
}
