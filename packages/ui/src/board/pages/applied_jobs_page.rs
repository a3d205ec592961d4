//! Applied jobs page - the signed-in user's applications.

use board_core::Notifier;
use dioxus::prelude::*;

use crate::board::AppliedJobsTableView;
use crate::{use_board_store, use_toasts};

/// Applied jobs page component.
#[component]
pub fn AppliedJobsPage() -> Element {
    let mut store = use_board_store();
    let toasts = use_toasts();
    let mut loading = use_signal(|| false);

    // Reload when the signed-in user changes
    let current_user_id = use_memo(move || store.read().current_user().map(|u| u.id));

    let _applied_resource = use_resource(move || async move {
        let Some(user_id) = current_user_id() else {
            store.write().set_applied_jobs(Vec::new());
            return;
        };

        loading.set(true);
        match api::list_applied_jobs(user_id.to_string()).await {
            Ok(applied) => store.write().set_applied_jobs(applied),
            Err(e) => {
                tracing::warn!("Failed to load applied jobs: {}", e);
                toasts.error(&format!("Failed to load applied jobs: {}", e));
            }
        }
        loading.set(false);
    });

    let signed_in = store.read().current_user().is_some();
    let applications = store.read().applied_jobs().to_vec();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Applied Jobs" }
                }
            }

            if !signed_in {
                div { class: "empty-state",
                    p { "Sign in to see your applications" }
                }
            } else if loading() {
                div { class: "loading", "Loading applications..." }
            } else {
                AppliedJobsTableView { applications }
            }
        }
    }
}
