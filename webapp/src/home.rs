use dioxus::prelude::*;
use dioxus_router::prelude::Link;

use common::config::SiteConfig;

use crate::{
    common::scroll::use_page_scroll_provider,
    components::{footer::Footer, navigation::NavBar, scroll_top::ScrollToTop},
    sections::{about::About, contact::Contact, hero::Hero, portfolio::Portfolio, skills::Skills},
};

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    use_page_scroll_provider(config.band(), config.nav.clone());

    rsx! {
        div { class: "page",
            NavBar { nav: config.nav.clone() }
            main {
                Hero {}
                About {}
                Portfolio {}
                Skills {}
                Contact {}
            }
            Footer {}
            ScrollToTop {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "Page not found: /{path}" }
            Link { class: "btn btn-primary", to: "/", "Back to home" }
        }
    }
}
