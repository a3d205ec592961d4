//! Related postings shown under a job's details.

use dioxus::prelude::*;

use super::JobCard;
use crate::use_board_store;

/// Other jobs in the current job's category, as published in the board store.
#[component]
pub fn RelatedJobs() -> Element {
    let store = use_board_store();
    let related = store.read().matching_jobs().to_vec();

    rsx! {
        section { class: "related-jobs",
            h2 { class: "section-title", "Related Jobs" }
            if related.is_empty() {
                div { class: "empty-state",
                    p { "No related jobs right now" }
                }
            } else {
                div { class: "job-grid",
                    for job in related.into_iter() {
                        JobCard { key: "{job.id}", job }
                    }
                }
            }
        }
    }
}
