//! Job board components.

mod applied_jobs_table;
mod job_card;
mod related_jobs;
mod status_badge;

pub mod pages;

pub use applied_jobs_table::AppliedJobsTableView;
pub use job_card::JobCard;
pub use related_jobs::RelatedJobs;
pub use status_badge::ApplicationStatusBadge;
