use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc};
use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use tracing::{debug, warn};

use common::{
    config::NavSettings,
    page::SectionId,
    scroll::{Band, FrameThrottle, ScrollSpy},
};

use crate::common::dom;

struct FrameState {
    throttle: FrameThrottle,
    // kept until the next frame is requested; a frame must not be dropped from inside its
    // own callback
    frame: Option<AnimationFrame>,
}

// window scroll listener that calls back at most once per animation frame
//
// dropping this removes the listener and cancels any frame still pending
pub struct ScrollFrames {
    _listener: EventListener,
    _state: Rc<RefCell<FrameState>>,
}

impl ScrollFrames {
    pub fn install(on_frame: impl Fn() + 'static) -> anyhow::Result<Self> {
        let window = dom::window()?;

        let state = Rc::new(RefCell::new(FrameState {
            throttle: FrameThrottle::new(),
            frame: None,
        }));
        let on_frame = Rc::new(on_frame);

        let listener = {
            let state = Rc::downgrade(&state);

            EventListener::new(&window, "scroll", move |_| {
                let Some(strong) = state.upgrade() else {
                    return;
                };
                let mut current = strong.borrow_mut();

                if !current.throttle.request() {
                    return;
                }

                let weak: Weak<RefCell<FrameState>> = state.clone();
                let on_frame = on_frame.clone();

                current.frame = Some(request_animation_frame(move |_| {
                    if let Some(state) = weak.upgrade() {
                        state.borrow_mut().throttle.complete();
                    }
                    on_frame();
                }));
            })
        };

        Ok(ScrollFrames {
            _listener: listener,
            _state: state,
        })
    }
}

// what the chrome around the page needs to know about scrolling
#[derive(Clone, Copy)]
pub struct PageScroll {
    pub active: Signal<Option<SectionId>>,
    pub scrolled: Signal<bool>,
    pub show_scroll_top: Signal<bool>,
}

pub fn use_page_scroll_provider(band: Band, nav: NavSettings) -> PageScroll {
    let active = use_signal(|| SectionId::ALL.first().copied());
    let scrolled = use_signal(|| false);
    let show_scroll_top = use_signal(|| false);

    let page = use_context_provider(|| PageScroll {
        active,
        scrolled,
        show_scroll_top,
    });

    use_future(move || {
        let nav = nav.clone();

        async move {
            let PageScroll {
                mut active,
                mut scrolled,
                mut show_scroll_top,
            } = page;

            let (tx, mut rx) = mpsc::unbounded::<()>();
            let mut spy = ScrollSpy::new(SectionId::ALL.to_vec(), band);

            // the frame callback runs outside of the dioxus runtime, so all it does is poke
            // this task
            let _frames = match ScrollFrames::install(move || {
                let _ = tx.unbounded_send(());
            }) {
                Ok(frames) => frames,
                Err(err) => {
                    warn!("scroll tracking unavailable: {err}");
                    return;
                }
            };

            debug!("scroll tracking installed");

            loop {
                let y = dom::scroll_y();

                let is_scrolled = nav.is_scrolled(y);
                if *scrolled.peek() != is_scrolled {
                    scrolled.set(is_scrolled);
                }

                let show = nav.show_scroll_to_top(y);
                if *show_scroll_top.peek() != show {
                    show_scroll_top.set(show);
                }

                if spy.update(|id| dom::element_rect(id.anchor())) {
                    active.set(spy.active());
                }

                if rx.next().await.is_none() {
                    break;
                }
            }
        }
    });

    page
}

pub fn use_page_scroll() -> PageScroll {
    use_context::<PageScroll>()
}
