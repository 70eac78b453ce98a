use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::motion::Variant;

// long enough for the browser to paint the hidden pose first, otherwise there is nothing to
// transition from
const FIRST_PAINT_MS: u32 = 20;

// renders its children in the variant's hidden pose, then in the visible pose once `visible`
// is true and the element has been painted at least once
#[component]
pub fn Motion(
    variant: Variant,
    visible: bool,
    #[props(default, into)] class: String,
    #[props(default)] id: Option<String>,
    #[props(default)] inline: bool,
    children: Element,
) -> Element {
    let mut painted = use_signal(|| false);

    use_future(move || async move {
        TimeoutFuture::new(FIRST_PAINT_MS).await;
        painted.set(true);
    });

    let style = variant.style(visible && painted());

    if inline {
        rsx! {
            span { id, class: "motion {class}", style, {children} }
        }
    } else {
        rsx! {
            div { id, class: "motion {class}", style, {children} }
        }
    }
}
