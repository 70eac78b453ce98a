use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc};
use gloo_events::EventListener;
use tracing::warn;

use common::{
    config::NavSettings,
    page::{NavLayout, NavState, SectionId},
};

use crate::{
    common::{dom, scroll::use_page_scroll},
    components::theme_toggle::ThemeToggle,
};

pub fn go_to(section: SectionId) {
    if let Err(err) = dom::scroll_to_element(section.anchor()) {
        warn!(%section, "failed to scroll to section: {err}");
    }
}

#[component]
fn NavBarButton(section: SectionId, active: bool, onnavigate: EventHandler<SectionId>) -> Element {
    rsx! {
        a {
            class: if active { "nav-link active" } else { "nav-link" },
            href: section.href(),
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                go_to(section);
                onnavigate.call(section);
            },
            "{section.label()}"
        }
    }
}

#[component]
pub fn NavBar(nav: NavSettings) -> Element {
    let page = use_page_scroll();
    let mut state = use_signal(NavState::default);

    // widening past the breakpoint puts the links back in the bar, so the overlay goes away
    use_future({
        let nav = nav.clone();
        move || {
            let nav = nav.clone();
            async move {
                let Ok(window) = dom::window() else {
                    return;
                };

                let (tx, mut rx) = mpsc::unbounded::<()>();
                let _listener = EventListener::new(&window, "resize", move |_| {
                    let _ = tx.unbounded_send(());
                });

                while rx.next().await.is_some() {
                    if state.peek().menu_open && nav.layout(dom::viewport_width()) == NavLayout::Expanded {
                        state.write().close_menu();
                    }
                }
            }
        }
    });

    let active = (page.active)();
    let scrolled = (page.scrolled)();
    let menu_open = state().menu_open;

    rsx! {
        nav { class: if scrolled { "navbar scrolled" } else { "navbar" },
            div { class: "container nav-container",
                a {
                    class: "brand",
                    href: SectionId::Hero.href(),
                    onclick: move |event: MouseEvent| {
                        event.prevent_default();
                        state.write().close_menu();
                        go_to(SectionId::Hero);
                    },
                    "NOVA"
                    span { "CODE" }
                }

                div { class: "nav-links",
                    for section in SectionId::ALL {
                        NavBarButton {
                            key: "{section}",
                            section,
                            active: active == Some(section),
                            onnavigate: move |_| {},
                        }
                    }
                    ThemeToggle {}
                }

                button {
                    class: "menu-button",
                    aria_label: "Toggle mobile menu",
                    aria_expanded: menu_open,
                    onclick: move |_| {
                        state.write().toggle_menu();
                    },
                    i { class: if menu_open { "fas fa-times" } else { "fas fa-bars" } }
                }
            }

            if menu_open {
                div { class: "menu-overlay",
                    for section in SectionId::ALL {
                        NavBarButton {
                            key: "{section}",
                            section,
                            active: active == Some(section),
                            onnavigate: move |_| state.write().close_menu(),
                        }
                    }
                    ThemeToggle { labelled: true }
                }
            }
        }
    }
}
