//! Transient toast notifications
//!
//! One toast is visible at a time; showing a new one replaces the current
//! and restarts the dismiss timer.

use std::time::Duration;

use biblio_shared::{ApiMessage, Severity, TOAST_DURATION_MS};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<ApiMessage>>,
    // generation counter so a stale dismiss timer cannot clear a newer toast
    epoch: RwSignal<u32>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            epoch: RwSignal::new(0),
        }
    }

    pub fn show(&self, message: ApiMessage) {
        let shown_at = self.epoch.get_untracked() + 1;
        self.epoch.set(shown_at);
        self.current.set(Some(message));

        let current = self.current;
        let epoch = self.epoch;
        set_timeout(
            move || {
                if epoch.get_untracked() == shown_at {
                    current.set(None);
                }
            },
            Duration::from_millis(TOAST_DURATION_MS),
        );
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.show(ApiMessage::success(msg));
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.show(ApiMessage::error(msg));
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("App provides the toaster")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let current = toaster.current;

    view! {
        <div
            id="toast"
            class="fixed bottom-6 left-1/2 z-50 -translate-x-1/2 rounded-lg px-4 py-3 text-sm font-medium text-white shadow-lg"
            class=("hidden", move || current.read().is_none())
            class=("bg-rose-500", move || {
                matches!(&*current.read(), Some(m) if m.severity == Severity::Error)
            })
            class=("bg-emerald-500", move || {
                matches!(&*current.read(), Some(m) if m.severity == Severity::Success)
            })
        >
            {move || current.get().map(|m| m.msg)}
        </div>
    }
}
