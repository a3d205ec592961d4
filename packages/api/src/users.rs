//! User lookup server functions.

use board_core::User;
use dioxus::prelude::*;

/// Find a user by email.
#[get("/api/users/by-email/:email")]
pub async fn find_user(email: String) -> Result<Option<User>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::UserRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        UserRepository::find_by_email(email.trim())
            .await
            .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
