//! Core domain types and view logic for the job board.
//!
//! This crate contains everything that does not depend on the UI framework:
//! - Job, User and Application types
//! - The shared [`BoardStore`]
//! - The detail page fetch controller, related jobs, apply/bookmark gating
//! - The applied jobs table projection

mod application;
mod applied;
mod detail;
mod error;
mod gate;
mod job;
mod notify;
mod related;
mod store;
mod user;

pub use application::{Application, ApplicationId, ApplicationStatus, BookmarkOutcome, BookmarkRequest};
pub use applied::{
    AppliedJobRow, AppliedJobsTable, PAGE_SIZE_OPTIONS, PLACEHOLDER, StatusEmphasis,
    format_day_first, format_salary,
};
pub use detail::{DetailController, DetailPhase, JobSource, LoadTicket, Settled, fetch_detail};
pub use error::BoardError;
pub use gate::{ApplyAffordance, ApplyNavigator, BookmarkWriter, apply, apply_affordance, bookmark};
pub use job::{Job, JobId, Poster};
pub use notify::{Notifier, ToastKind};
pub use related::derive_related;
pub use store::BoardStore;
pub use user::{User, UserId};
