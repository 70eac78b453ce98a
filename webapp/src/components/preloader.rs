use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use futures::{
    StreamExt,
    channel::mpsc,
    future::{Either, select},
};
use gloo_events::EventListener;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use common::{
    motion::{scale_in, star_field},
    preloader::{Phase, PreloaderConfig, PreloaderGate},
};

use crate::{
    common::{dom, mount_rng},
    components::motion::Motion,
};

const STAR_COUNT: usize = 50;

fn millis_until(at: DateTime<Utc>) -> u32 {
    let wait = (at - dom::now()).num_milliseconds().max(0);
    u32::try_from(wait).unwrap_or(u32::MAX)
}

// drives a PreloaderGate off the wall clock and publishes its phase
//
// there is nothing asynchronous behind the splash, so the page counts as ready as soon as the
// app has mounted and the gate is left to enforce the dwell
pub fn use_preloader(config: PreloaderConfig) -> Signal<Phase> {
    let mounted_at = use_hook(dom::now);
    let phase = use_signal(|| Phase::Splash);

    use_future(move || {
        let mut phase = phase;

        async move {
            let mut gate = PreloaderGate::new(mounted_at, config);
            gate.mark_ready(dom::now());

            // a hidden tab may never run the fade's transition; finish it instead
            let (tx, mut rx) = mpsc::unbounded::<()>();
            let _listener = dom::document().ok().map(|document| {
                EventListener::new(&document, "visibilitychange", move |_| {
                    let _ = tx.unbounded_send(());
                })
            });

            loop {
                let now = dom::now();
                let current = gate.phase(now);

                if *phase.peek() != current {
                    debug!(?current, "preloader phase");
                    phase.set(current);
                }

                let Some(wakeup) = gate.next_wakeup(now) else {
                    break;
                };

                let timer = Box::pin(TimeoutFuture::new(millis_until(wakeup)));
                match select(timer, rx.next()).await {
                    Either::Left(_) => {}
                    Either::Right((Some(()), _)) => {
                        if dom::page_hidden() {
                            gate.finish_fade(dom::now());
                        }
                    }
                    // the listener is gone, fall back to the timer alone
                    Either::Right((None, timer)) => timer.await,
                }
            }
        }
    });

    phase
}

#[component]
pub fn Preloader(fading: bool, fade_ms: u32) -> Element {
    let stars = use_hook(|| star_field(STAR_COUNT, &mut mount_rng()));

    rsx! {
        div {
            class: if fading { "preloader fading" } else { "preloader" },
            style: "transition-duration: {fade_ms}ms;",
            aria_hidden: fading,
            div { class: "particles",
                for (i, star) in stars.iter().enumerate() {
                    div { key: "{i}", class: "star", style: star.style() }
                }
            }
            Motion { variant: scale_in(), visible: true,
                div { class: "preloader-title", "LOADING" }
                div { class: "preloader-subtitle", "Entering Universe" }
            }
        }
    }
}
