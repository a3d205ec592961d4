//! Apply flow entry page.

use dioxus::prelude::*;

use crate::use_board_store;

/// Landing page of the apply flow for a job.
#[component]
pub fn ApplyJobPage(job_id: String) -> Element {
    let store = use_board_store();
    let title = store
        .read()
        .current_job()
        .filter(|j| j.id.to_string() == job_id)
        .map(|j| j.title.clone())
        .unwrap_or_else(|| "this position".to_string());

    rsx! {
        div { class: "page-container",
            nav { class: "breadcrumb",
                Link { to: "/", class: "breadcrumb-link", "Jobs" }
                span { class: "breadcrumb-separator", "/" }
                Link { to: "/jobs/{job_id}", class: "breadcrumb-link", "Job Details" }
                span { class: "breadcrumb-separator", "/" }
                span { class: "breadcrumb-current", "Apply" }
            }
            div { class: "card",
                div { class: "card-header",
                    h1 { class: "card-title", "Apply for {title}" }
                }
                div { class: "card-body",
                    p { "Upload your CV and a short cover letter to complete your application." }
                }
            }
        }
    }
}
