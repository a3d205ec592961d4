// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use board_core::JobId;
use dioxus::prelude::*;

use ui::board::pages::{AppliedJobsPage, ApplyJobPage, JobDetailsPage, JobListingPage};
use ui::{Navbar, ToastContainer, use_board_store_provider, use_toast_provider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
        #[route("/")]
        Jobs {},
        #[route("/jobs/:id")]
        JobDetails { id: String },
        #[route("/jobs/:id/apply")]
        ApplyJob { id: String },
        #[route("/applied")]
        AppliedJobs {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_board_store_provider();
    use_toast_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared `Navbar` wired to the web `Route` enum, plus the toast stack.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link {
                to: Route::Jobs {},
                class: "nav-link",
                active_class: "active",
                "Jobs"
            }
            Link {
                to: Route::AppliedJobs {},
                class: "nav-link",
                active_class: "active",
                "Applied Jobs"
            }
        }

        main { class: "site-main",
            Outlet::<Route> {}
        }

        ToastContainer {}
    }
}

/// Job listing page.
#[component]
fn Jobs() -> Element {
    rsx! {
        JobListingPage {}
    }
}

/// Job details page.
#[component]
fn JobDetails(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        JobDetailsPage {
            job_id: id,
            on_apply: move |job_id: JobId| {
                nav.push(Route::ApplyJob { id: job_id.to_string() });
            },
        }
    }
}

/// Apply flow page.
#[component]
fn ApplyJob(id: String) -> Element {
    rsx! {
        ApplyJobPage { job_id: id }
    }
}

/// Applied jobs page.
#[component]
fn AppliedJobs() -> Element {
    rsx! {
        AppliedJobsPage {}
    }
}
