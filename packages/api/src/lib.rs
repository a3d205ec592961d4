//! Server API functions for the job board.
//!
//! This crate contains all shared fullstack server functions for:
//! - Job postings (get, list)
//! - Bookmarks
//! - Applications of the signed-in user
//! - User lookup

mod applications;
mod bookmarks;
mod jobs;
mod users;

#[cfg(feature = "server")]
mod init;

// Re-export all server functions
pub use applications::*;
pub use bookmarks::*;
pub use jobs::*;
pub use users::*;

#[cfg(feature = "server")]
pub use init::*;

// Re-export core types for convenience
pub use board_core::{
    Application, ApplicationStatus, BookmarkOutcome, BookmarkRequest, Job, JobId, User, UserId,
};
