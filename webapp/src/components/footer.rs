use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use common::{content::SOCIAL_LINKS, page::SectionId};

use crate::components::navigation::go_to;

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        a {
                            class: "brand",
                            href: SectionId::Hero.href(),
                            onclick: move |event: MouseEvent| {
                                event.prevent_default();
                                go_to(SectionId::Hero);
                            },
                            "HARSH"
                            span { "PATIL" }
                        }
                        p { class: "info-label", "© {year} All Rights Reserved" }
                    }

                    div {
                        h4 { "Quick Links" }
                        ul { class: "footer-links",
                            for section in SectionId::ALL {
                                li { key: "{section}",
                                    a {
                                        href: section.href(),
                                        onclick: move |event: MouseEvent| {
                                            event.prevent_default();
                                            go_to(section);
                                        },
                                        "{section.label()}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 { "Connect" }
                        div { class: "socials",
                            for link in SOCIAL_LINKS {
                                a {
                                    key: "{link.name}",
                                    class: "social",
                                    href: link.url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    aria_label: link.name,
                                    i { class: link.icon }
                                }
                            }
                        }
                    }
                }

                p { class: "copyright", "Designed and developed with ♥ in Rust" }
            }
        }
    }
}
