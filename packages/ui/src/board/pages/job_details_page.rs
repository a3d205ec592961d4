//! Job details page - one posting, its related jobs, and the apply/bookmark actions.

use board_core::{
    ApplyAffordance, DetailController, DetailPhase, Job, JobId, apply, apply_affordance, bookmark,
    fetch_detail, format_salary,
};
use dioxus::prelude::*;

use crate::board::RelatedJobs;
use crate::{ApiClient, ApplyHandler, refresh_jobs, use_board_store, use_toasts};

/// Props for JobDetailsPage.
#[derive(Props, Clone, PartialEq)]
pub struct JobDetailsPageProps {
    /// Job id taken from the route.
    pub job_id: String,
    /// Opens the apply flow for a job.
    pub on_apply: EventHandler<JobId>,
}

/// Job details page component.
#[component]
pub fn JobDetailsPage(props: JobDetailsPageProps) -> Element {
    let mut store = use_board_store();
    let toasts = use_toasts();
    let mut controller = use_signal(DetailController::new);

    // Related jobs need the full collection, which may not be loaded on a direct visit
    let _jobs_resource = use_resource(move || async move {
        if store.peek().jobs().is_empty()
            && let Err(e) = refresh_jobs(store).await
        {
            tracing::warn!("Failed to load jobs for related list: {}", e);
        }
    });

    // Fetch the job whenever the route id changes
    use_effect(use_reactive((&props.job_id,), move |(job_id,)| {
        let begun = controller.write().begin(&job_id);
        match begun {
            Ok(ticket) => {
                spawn(async move {
                    let result = fetch_detail(&ApiClient, &ticket).await;
                    controller
                        .write()
                        .settle(&ticket, result, &mut store.write(), &toasts);
                });
            }
            Err(e) => tracing::warn!("Job details requested without an id: {}", e),
        }
    }));

    let phase = controller.read().phase().clone();

    let body = match phase {
        DetailPhase::Loading => rsx! {
            div { class: "loading loading-fullscreen",
                div { class: "spinner" }
                p { class: "text-xs uppercase", "Loading Resources Hold Tight..." }
            }
        },
        DetailPhase::Error(_) => rsx! {
            div { class: "empty-state",
                p { "This job could not be loaded." }
                Link { to: "/", class: "btn", "Back to jobs" }
            }
        },
        DetailPhase::Ready(job) => rsx! {
            JobDetailsBody { job, on_apply: props.on_apply }
            RelatedJobs {}
        },
    };

    rsx! {
        div { class: "page-container",
            nav { class: "breadcrumb",
                Link { to: "/", class: "breadcrumb-link", "Jobs" }
                span { class: "breadcrumb-separator", "/" }
                span { class: "breadcrumb-current", "Job Details" }
            }
            {body}
        }
    }
}

#[component]
fn JobDetailsBody(job: Job, on_apply: EventHandler<JobId>) -> Element {
    let store = use_board_store();
    let toasts = use_toasts();

    let affordance = apply_affordance(store.read().current_user(), &job);
    let salary = format_salary(job.salary);
    let deadline = job.deadline_display();
    let job_id = job.id;
    let job_for_bookmark = job.clone();

    let on_apply_click = move |_| {
        let store = store.read();
        if let Err(e) = apply(store.current_user(), &job_id, &toasts, &ApplyHandler(on_apply)) {
            tracing::debug!("Apply blocked: {}", e);
        }
    };

    let on_bookmark_click = move |_| {
        let user = store.read().current_user().cloned();
        let job = job_for_bookmark.clone();
        spawn(async move {
            if let Err(e) = bookmark(user.as_ref(), &job, &ApiClient, &toasts).await {
                tracing::debug!("Bookmark not saved: {}", e);
            }
        });
    };

    rsx! {
        div { class: "page-header",
            div { class: "page-header-content",
                div { class: "page-header-title-row",
                    h1 { class: "page-title", "{job.title}" }
                    span { class: "tag", "{job.job_type}" }
                }
                p { class: "page-description", "{job.company}" }
            }
            div { class: "page-header-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: on_bookmark_click,
                    "Bookmark"
                }
                if affordance == ApplyAffordance::OwnJob {
                    p { class: "text-xs text-red-500", "unable Apply to your Own jobs" }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: on_apply_click,
                        "Apply Position"
                    }
                }
            }
        }

        div { class: "detail-grid",
            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Overview" }
                }
                div { class: "card-body",
                    div { class: "detail-list",
                        div { class: "detail-item",
                            span { class: "detail-label", "Job Poster" }
                            span { class: "detail-value", "{job.poster.name}" }
                        }
                        div { class: "detail-item",
                            span { class: "detail-label", "Email" }
                            span { class: "detail-value", "{job.poster.email}" }
                        }
                        div { class: "detail-item",
                            span { class: "detail-label", "Category" }
                            span { class: "detail-value", "{job.category}" }
                        }
                        div { class: "detail-item",
                            span { class: "detail-label", "Salary" }
                            span { class: "detail-value tabular-nums", "{salary}" }
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Job Summary" }
                }
                div { class: "card-body",
                    div { class: "detail-list",
                        div { class: "detail-item",
                            span { class: "detail-label", "Total Vacancies" }
                            span { class: "detail-value", "{job.vacancy}" }
                        }
                        div { class: "detail-item",
                            span { class: "detail-label", "Dead Line" }
                            span { class: "detail-value tabular-nums", "{deadline}" }
                        }
                        div { class: "detail-item",
                            span { class: "detail-label", "Experience Required" }
                            span { class: "detail-value", "{job.experience}" }
                        }
                    }
                }
            }
        }

        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Job Description" }
            }
            div { class: "card-body",
                p { "{job.description}" }
            }
        }
    }
}
