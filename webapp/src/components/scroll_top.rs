use dioxus::prelude::*;
use tracing::warn;

use crate::common::{dom, scroll::use_page_scroll};

#[component]
pub fn ScrollToTop() -> Element {
    let page = use_page_scroll();
    let visible = (page.show_scroll_top)();

    rsx! {
        button {
            class: if visible { "scroll-top" } else { "scroll-top hidden" },
            aria_label: "Scroll to top",
            aria_hidden: !visible,
            tabindex: if visible { "0" } else { "-1" },
            onclick: move |_| {
                if let Err(err) = dom::scroll_to_top() {
                    warn!("failed to scroll to top: {err}");
                }
            },
            i { class: "fas fa-arrow-up" }
        }
    }
}
