//! Board state context and the server-function backed implementations of
//! the core seams.

use board_core::{
    ApplyNavigator, BoardError, BoardStore, BookmarkOutcome, BookmarkRequest, BookmarkWriter, Job,
    JobId, JobSource, Notifier,
};
use dioxus::prelude::*;

/// Provide the shared board state to every component below the caller.
pub fn use_board_store_provider() -> Signal<BoardStore> {
    use_context_provider(|| Signal::new(BoardStore::new()))
}

/// Get the shared board state provided by an ancestor.
pub fn use_board_store() -> Signal<BoardStore> {
    use_context::<Signal<BoardStore>>()
}

/// Talks to the backend through the fullstack server functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiClient;

impl JobSource for ApiClient {
    async fn fetch_job(&self, id: &str) -> Result<Job, BoardError> {
        match api::get_job(id.to_string()).await {
            Ok(Some(job)) => Ok(job),
            Ok(None) => Err(BoardError::NotFound(id.to_string())),
            Err(e) => Err(BoardError::Network(e.to_string())),
        }
    }
}

impl BookmarkWriter for ApiClient {
    async fn write_bookmark(&self, request: BookmarkRequest) -> Result<BookmarkOutcome, BoardError> {
        api::bookmark_job(request)
            .await
            .map_err(|e| BoardError::WriteFailure(e.to_string()))
    }
}

/// Routes the apply action to whatever handler the router supplied.
pub struct ApplyHandler(pub EventHandler<JobId>);

impl ApplyNavigator for ApplyHandler {
    fn open_apply_flow(&self, job_id: &JobId) {
        self.0.call(*job_id);
    }
}

/// Load the job collection into the store.
pub async fn refresh_jobs(mut store: Signal<BoardStore>) -> Result<(), BoardError> {
    let jobs = api::list_jobs(None, None)
        .await
        .map_err(|e| BoardError::Network(e.to_string()))?;
    store.write().set_jobs(jobs);
    Ok(())
}

/// Sign in as the user with `email`.
pub async fn sign_in<N: Notifier>(
    mut store: Signal<BoardStore>,
    email: String,
    notifier: &N,
) -> Result<(), BoardError> {
    match api::find_user(email.clone()).await {
        Ok(Some(user)) => {
            notifier.success(&format!("Welcome back, {}", user.name));
            store.write().set_current_user(Some(user));
            Ok(())
        }
        Ok(None) => {
            notifier.error(&format!("No account for {}", email));
            Err(BoardError::NotFound(email))
        }
        Err(e) => {
            let err = BoardError::Network(e.to_string());
            notifier.error(&err.to_string());
            Err(err)
        }
    }
}
