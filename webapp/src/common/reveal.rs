use anyhow::anyhow;
use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc::{self, UnboundedSender}};
use gloo_timers::future::TimeoutFuture;
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use common::reveal::{Reveal, RevealOptions, visible_ratio};

use crate::common::{dom, scroll::ScrollFrames};

// whatever is feeding intersection ratios into the hook; dropping it stops the feed
enum Watch {
    Observer {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array)>,
    },
    Scroll(ScrollFrames),
}

impl Drop for Watch {
    fn drop(&mut self) {
        if let Watch::Observer { observer, .. } = self {
            observer.disconnect();
        }
    }
}

fn observe(element_id: &str, threshold: f64, tx: UnboundedSender<f64>) -> anyhow::Result<Watch> {
    let element = dom::document()?
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow!("no element #{element_id}"))?;

    let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                let _ = tx.unbounded_send(entry.intersection_ratio());
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| anyhow!("IntersectionObserver unavailable: {err:?}"))?;
    observer.observe(&element);

    Ok(Watch::Observer {
        observer,
        _callback: callback,
    })
}

fn poll_on_scroll(element_id: &str, tx: UnboundedSender<f64>) -> anyhow::Result<Watch> {
    let id = element_id.to_owned();
    let measure = move || {
        if let Some(rect) = dom::element_rect(&id) {
            let _ = tx.unbounded_send(visible_ratio(rect, dom::viewport_height()));
        }
    };

    // one reading up front, the page may already be scrolled past the element
    measure();
    Ok(Watch::Scroll(ScrollFrames::install(measure)?))
}

// publishes whether the element with this id is in view
//
// IntersectionObserver when the browser has one, a frame-throttled scroll listener when it
// does not, and a permanent true when neither could be installed
pub fn use_reveal(element_id: impl Into<String>, options: RevealOptions) -> Signal<bool> {
    let element_id = element_id.into();
    let in_view = use_signal(|| false);

    use_future(move || {
        let element_id = element_id.clone();
        let mut in_view = in_view;

        async move {
            // let the element reach the dom before asking for it
            TimeoutFuture::new(0).await;

            let mut reveal = Reveal::new(options);
            let (tx, mut rx) = mpsc::unbounded::<f64>();

            let watch = match observe(&element_id, reveal.options().threshold, tx.clone()) {
                Ok(watch) => Ok(watch),
                Err(err) => {
                    debug!(%element_id, "falling back to scroll polling: {err}");
                    poll_on_scroll(&element_id, tx)
                }
            };

            let _watch = match watch {
                Ok(watch) => watch,
                Err(err) => {
                    warn!(%element_id, "reveal degraded: {err}");
                    reveal.degrade();
                    in_view.set(reveal.in_view());
                    return;
                }
            };

            while let Some(ratio) = rx.next().await {
                if reveal.observe(ratio) {
                    in_view.set(reveal.in_view());
                }

                if !reveal.is_attached() {
                    debug!(%element_id, "revealed once, detaching");
                    break;
                }
            }
        }
    });

    in_view
}
