use dioxus::prelude::*;

use crate::{sign_in, use_board_store, use_toasts};

/// Site navigation with the viewer's sign-in state.
///
/// Route links are passed as children so each platform can use its own `Route` enum.
#[component]
pub fn Navbar(children: Element) -> Element {
    let mut store = use_board_store();
    let toasts = use_toasts();
    let mut email = use_signal(String::new);

    let user_name = store.read().current_user().map(|u| u.name.clone());

    rsx! {
        nav { id: "navbar", class: "navbar",
            span { class: "navbar-logo", "Job Board" }
            div { class: "navbar-links", {children} }
            div { class: "navbar-session",
                if let Some(name) = user_name {
                    span { class: "navbar-user", "{name}" }
                    button {
                        class: "btn btn-small",
                        onclick: move |_| store.write().set_current_user(None),
                        "Sign out"
                    }
                } else {
                    input {
                        class: "navbar-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                    button {
                        class: "btn btn-small btn-primary",
                        onclick: move |_| {
                            let address = email();
                            spawn(async move {
                                if sign_in(store, address, &toasts).await.is_ok() {
                                    email.set(String::new());
                                }
                            });
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
