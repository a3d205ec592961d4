//! Full-page job board views.

mod applied_jobs_page;
mod apply_job_page;
mod job_details_page;
mod job_listing_page;

pub use applied_jobs_page::AppliedJobsPage;
pub use apply_job_page::ApplyJobPage;
pub use job_details_page::JobDetailsPage;
pub use job_listing_page::JobListingPage;
