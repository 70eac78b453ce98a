use dioxus::prelude::*;
use tracing::debug;

use common::theme::{ThemeController, ThemeVariant};

use crate::common::{dom::{self, DocumentRoot}, storage::LocalStore};

pub type SiteTheme = ThemeController<LocalStore, DocumentRoot>;

// the theme controller lives in a signal at the root of the app, so toggling it re-renders
// anything that asked for the current variant
#[derive(Clone, Copy)]
pub struct ThemeContext(Signal<SiteTheme>);

impl ThemeContext {
    pub fn variant(&self) -> ThemeVariant {
        self.0.read().variant()
    }

    pub fn toggle(&mut self) -> ThemeVariant {
        self.0.write().toggle()
    }
}

pub fn use_theme_provider(storage_key: &str) -> ThemeContext {
    use_context_provider(|| {
        let host_prefers_dark = dom::prefers_dark();
        debug!(?host_prefers_dark, "mounting theme provider");

        ThemeContext(Signal::new(ThemeController::with_key(
            storage_key,
            LocalStore,
            DocumentRoot,
            host_prefers_dark,
        )))
    })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
