use chrono::TimeDelta;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use common::toast::{ToastBus, ToastId, ToastOptions};

use crate::common::dom::now;

#[derive(Clone, Copy)]
pub struct Toasts(Signal<ToastBus>);

impl Toasts {
    pub fn bus(&self) -> Signal<ToastBus> {
        self.0
    }

    pub fn publish(&mut self, options: ToastOptions) -> ToastId {
        self.0.write().publish(options, now())
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.0.write().dismiss(id);
    }
}

// mounts the bus and the one timer that expires it
//
// the timer always aims at the nearest deadline.  whenever the list changes the effect
// re-runs and replaces it; spawned tasks belong to this scope, so unmounting drops it
pub fn use_toast_provider(bus: impl FnOnce() -> ToastBus) -> Toasts {
    let toasts = use_context_provider(|| Toasts(Signal::new(bus())));
    let mut timer = use_signal(|| None::<Task>);

    use_effect(move || {
        let deadline = toasts.0.read().next_deadline();

        if let Some(task) = timer.write().take() {
            task.cancel();
        }

        let Some(deadline) = deadline else {
            return;
        };

        let wait = (deadline - now()).max(TimeDelta::zero());
        let wait = u32::try_from(wait.num_milliseconds()).unwrap_or(u32::MAX);

        timer.set(Some(spawn(async move {
            TimeoutFuture::new(wait).await;

            let mut bus = toasts.0;
            let expired = bus.write().expire(now());
            debug!(count = expired.len(), "toast timer fired");
        })));
    });

    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();
    let list = toasts.bus().read().toasts().to_vec();

    rsx! {
        ol { class: "toaster", aria_live: "polite",
            for toast in list {
                li {
                    key: "{toast.id}",
                    class: toast.kind.css_class(),
                    role: "status",
                    div { class: "toast-body",
                        div { class: "toast-title", "{toast.title}" }
                        if let Some(description) = toast.description.as_deref() {
                            div { class: "toast-description", "{description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        aria_label: "Close",
                        onclick: move |_| toasts.dismiss(toast.id),
                        i { class: "fas fa-times" }
                    }
                }
            }
        }
    }
}
