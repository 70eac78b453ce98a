use dioxus::prelude::*;

use common::motion::fade_in_up;

use crate::components::motion::Motion;

pub mod about;
pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod skills;

// "<accent> <title>" heading with a subtitle underneath
#[component]
fn SectionHeading(accent: &'static str, title: &'static str, subtitle: &'static str, visible: bool) -> Element {
    rsx! {
        div { class: "section-heading",
            Motion { variant: fade_in_up(), visible,
                h2 { class: "section-title",
                    span { "{accent}" }
                    " {title}"
                }
            }
            Motion { variant: fade_in_up().delayed(100), visible,
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
