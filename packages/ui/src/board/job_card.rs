//! Card summarizing a single job posting.

use board_core::{Job, format_salary};
use dioxus::prelude::*;

/// Props for JobCard component.
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    /// The job to display.
    pub job: Job,
}

/// Card linking to a job's details page.
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = &props.job;
    let salary = format_salary(job.salary);
    let deadline = job.deadline_display();

    rsx! {
        div { class: "job-card",
            div { class: "job-card-header",
                h3 { class: "job-card-title", "{job.title}" }
                span { class: "job-card-company", "{job.company}" }
            }
            div { class: "job-card-meta",
                span { class: "tag", "{job.category}" }
                span { class: "tag", "{job.job_type}" }
                span { class: "job-card-salary", "{salary}" }
            }
            div { class: "job-card-footer",
                span { class: "text-muted", "Deadline {deadline}" }
                Link {
                    to: "/jobs/{job.id}",
                    class: "btn btn-small",
                    "View Details"
                }
            }
        }
    }
}
