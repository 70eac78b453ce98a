use dioxus::prelude::*;

use crate::common::theme::use_theme;

#[component]
pub fn ThemeToggle(#[props(default)] labelled: bool) -> Element {
    let mut theme = use_theme();
    let variant = theme.variant();

    // the icon shows what the button switches to
    let (icon, label) = if variant.is_dark() {
        ("fas fa-sun", "Light Mode")
    } else {
        ("fas fa-moon", "Dark Mode")
    };

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle theme",
            onclick: move |_| {
                theme.toggle();
            },
            i { class: icon }
            if labelled {
                span { "{label}" }
            }
        }
    }
}
