//! Application server functions.

use board_core::Application;
use dioxus::prelude::*;

/// List the applications a user has made.
#[get("/api/applications/:user_id")]
pub async fn list_applied_jobs(user_id: String) -> Result<Vec<Application>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use board_core::UserId;
        use db::repositories::ApplicationRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let user_id = UserId::parse(&user_id)
            .map_err(|e| ServerFnError::new(format!("Invalid user ID: {}", e)))?;

        ApplicationRepository::list_for_user(user_id)
            .await
            .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
