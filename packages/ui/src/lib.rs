//! This crate contains all shared UI for the workspace.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod client;
pub use client::{
    ApiClient, ApplyHandler, refresh_jobs, sign_in, use_board_store, use_board_store_provider,
};

mod navbar;
pub use navbar::Navbar;

mod toast;
pub use toast::{Toast, ToastContainer, Toasts, use_toast_provider, use_toasts};

pub mod board;
