use anyhow::{Context, anyhow};
use chrono::{DateTime, Utc};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, VisibilityState, Window,
};

use common::{
    reveal::Rect,
    theme::{Palette, ThemeRoot, ThemeVariant},
};

// thin wrappers over web-sys
//
// everything here returns an Option or an anyhow::Result; the callers decide whether a
// missing window is worth logging

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no window"))
}

pub fn document() -> anyhow::Result<Document> {
    window()?.document().ok_or_else(|| anyhow!("no document"))
}

pub fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

// viewport coordinates of the element with this id, if it is mounted
pub fn element_rect(id: &str) -> Option<Rect> {
    let element = document().ok()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(rect.top(), rect.bottom()))
}

pub fn scroll_to_top() -> anyhow::Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);

    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_to_element(id: &str) -> anyhow::Result<()> {
    let element = document()?
        .get_element_by_id(id)
        .with_context(|| format!("no element #{id}"))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);

    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn page_hidden() -> bool {
    document()
        .map(|d| d.visibility_state() == VisibilityState::Hidden)
        .unwrap_or(false)
}

// None when the host cannot answer (no matchMedia)
pub fn prefers_dark() -> Option<bool> {
    window()
        .ok()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
}

// the document element carries both the palette tokens and the variant class
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn apply(&mut self, variant: ThemeVariant, palette: &Palette) -> anyhow::Result<()> {
        let document = document()?;

        let root: HtmlElement = document
            .document_element()
            .context("no document element")?
            .dyn_into()
            .map_err(|_| anyhow!("document element is not an html element"))?;

        let style = root.style();
        for (name, value) in palette.tokens() {
            style
                .set_property(name, &value.to_string())
                .map_err(|err| anyhow!("failed to set {name}: {err:?}"))?;
        }

        let classes = root.class_list();
        classes
            .remove_1(variant.toggled().css_class())
            .map_err(|err| anyhow!("failed to update root class: {err:?}"))?;
        classes
            .add_1(variant.css_class())
            .map_err(|err| anyhow!("failed to update root class: {err:?}"))?;

        if let Some(body) = document.body() {
            body.class_list()
                .toggle_with_force("light-mode", !variant.is_dark())
                .map_err(|err| anyhow!("failed to update body class: {err:?}"))?;
        }

        Ok(())
    }
}
