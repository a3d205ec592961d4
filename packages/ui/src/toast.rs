//! Stacked, auto-dismissing toast notifications.

use board_core::{Notifier, ToastKind};
use dioxus::prelude::*;

/// How long a toast stays on screen, in milliseconds.
const TOAST_LIFETIME_MS: u32 = 4000;

/// A single notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle to the shared toast stack. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }
}

impl Notifier for Toasts {
    fn notify(&self, kind: ToastKind, message: &str) {
        let mut items = self.items;
        let mut next_id = self.next_id;

        let id = *next_id.peek();
        next_id.set(id + 1);
        items.write().push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
    }
}

/// Provide the toast stack to every component below the caller.
pub fn use_toast_provider() -> Toasts {
    use_context_provider(Toasts::new)
}

/// Get the toast stack provided by an ancestor.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Renders the toast stack. Mount once near the root.
#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_toasts();
    let items = toasts.items;

    rsx! {
        div { class: "toast-container",
            for toast in items().into_iter() {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id| toasts.dismiss(id),
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;
    let kind = toast.kind.as_str();

    // Dismiss automatically once the lifetime runs out
    use_future(move || async move {
        sleep_ms(TOAST_LIFETIME_MS).await;
        on_dismiss.call(id);
    });

    rsx! {
        div { class: "toast toast-{kind}",
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-close",
                onclick: move |_| on_dismiss.call(id),
                "×"
            }
        }
    }
}

async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}
