//! Job listing page - all open postings.

use board_core::Notifier;
use dioxus::prelude::*;

use crate::board::JobCard;
use crate::{refresh_jobs, use_board_store, use_toasts};

/// Job listing page component.
#[component]
pub fn JobListingPage() -> Element {
    let store = use_board_store();
    let toasts = use_toasts();
    let mut loading = use_signal(|| true);

    let _jobs_resource = use_resource(move || async move {
        if let Err(e) = refresh_jobs(store).await {
            tracing::warn!("Failed to load jobs: {}", e);
            toasts.error(&e.to_string());
        }
        loading.set(false);
    });

    let jobs = store.read().jobs().to_vec();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Open Positions" }
                    p { class: "page-description", "{jobs.len()} jobs available" }
                }
            }

            if loading() && jobs.is_empty() {
                div { class: "loading", "Loading jobs..." }
            } else if jobs.is_empty() {
                div { class: "empty-state",
                    p { "No jobs posted yet" }
                }
            } else {
                div { class: "job-grid",
                    for job in jobs.into_iter() {
                        JobCard { key: "{job.id}", job }
                    }
                }
            }
        }
    }
}
