use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{SubscriptionId, Subscribers, storage::KeyValueStore};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    // the class carried by the document root; identical to the persisted value
    pub fn css_class(self) -> &'static str {
        self.as_str()
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown theme variant {0:?}")]
pub struct UnknownVariant(pub String);

impl FromStr for ThemeVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

// a design token value
//
// tokens are written as bare channels ("260 75% 25%") rather than full colors so that
// stylesheets can compose them as hsl(var(--primary) / 0.3)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Hsl { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Hsl,
    pub primary: Hsl,
    pub secondary: Hsl,
    pub accent: Hsl,
    pub foreground: Hsl,
    pub muted: Hsl,
    pub neutral: Hsl,
    pub neutral_dark: Hsl,
}

impl Palette {
    // deep purple space with cyan highlights
    pub const COSMIC_DARK: Palette = Palette {
        background: Hsl::new(260, 75, 25),
        primary: Hsl::new(260, 75, 45),
        secondary: Hsl::new(180, 100, 50),
        accent: Hsl::new(187, 100, 60),
        foreground: Hsl::new(0, 0, 100),
        muted: Hsl::new(260, 70, 35),
        neutral: Hsl::new(217, 10, 70),
        neutral_dark: Hsl::new(240, 30, 10),
    };

    // daylight sky, softer glows
    pub const COSMIC_LIGHT: Palette = Palette {
        background: Hsl::new(220, 20, 90),
        primary: Hsl::new(259, 75, 45),
        secondary: Hsl::new(187, 90, 45),
        accent: Hsl::new(259, 75, 45),
        foreground: Hsl::new(240, 30, 10),
        muted: Hsl::new(220, 20, 80),
        neutral: Hsl::new(240, 10, 40),
        neutral_dark: Hsl::new(220, 20, 80),
    };

    pub fn for_variant(variant: ThemeVariant) -> &'static Palette {
        match variant {
            ThemeVariant::Dark => &Self::COSMIC_DARK,
            ThemeVariant::Light => &Self::COSMIC_LIGHT,
        }
    }

    pub fn tokens(&self) -> [(&'static str, Hsl); 8] {
        [
            ("--background", self.background),
            ("--primary", self.primary),
            ("--secondary", self.secondary),
            ("--accent", self.accent),
            ("--foreground", self.foreground),
            ("--muted", self.muted),
            ("--neutral", self.neutral),
            ("--neutral-dark", self.neutral_dark),
        ]
    }
}

// the document root, as far as theming is concerned
//
// apply() receives the whole palette at once so that an implementation can write every
// property in one go; nobody should ever observe half of one palette and half of another
pub trait ThemeRoot {
    fn apply(&mut self, variant: ThemeVariant, palette: &Palette) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, Default)]
pub struct RecordingRoot {
    pub class: Option<String>,
    pub properties: BTreeMap<String, String>,
    pub applications: usize,
}

impl ThemeRoot for RecordingRoot {
    fn apply(&mut self, variant: ThemeVariant, palette: &Palette) -> anyhow::Result<()> {
        let mut properties = BTreeMap::new();
        for (name, value) in palette.tokens() {
            properties.insert(name.to_owned(), value.to_string());
        }

        self.class = Some(variant.css_class().to_owned());
        self.properties = properties;
        self.applications += 1;
        Ok(())
    }
}

// the stored preference wins; otherwise the site is dark no matter what the host says.
// the host preference is still consulted so that it shows up in the logs
pub fn initial_variant(stored: Option<&str>, host_prefers_dark: Option<bool>) -> ThemeVariant {
    if let Some(variant) = stored.and_then(|s| s.parse().ok()) {
        return variant;
    }

    match host_prefers_dark {
        Some(true) => ThemeVariant::Dark,
        Some(false) => {
            debug!("host prefers a light scheme, keeping the dark default");
            ThemeVariant::Dark
        }
        None => ThemeVariant::Dark,
    }
}

pub struct ThemeController<S: KeyValueStore, R: ThemeRoot> {
    store: S,
    root: R,
    key: String,
    variant: ThemeVariant,
    subscribers: Subscribers<ThemeVariant>,
}

impl<S: KeyValueStore, R: ThemeRoot> ThemeController<S, R> {
    pub fn new(store: S, root: R, host_prefers_dark: Option<bool>) -> Self {
        Self::with_key(THEME_KEY, store, root, host_prefers_dark)
    }

    pub fn with_key(key: impl Into<String>, store: S, root: R, host_prefers_dark: Option<bool>) -> Self {
        let key = key.into();

        // a throwing read is the same as no preference at all
        let stored = match store.get(&key) {
            Ok(val) => val,
            Err(err) => {
                warn!("failed to read theme preference: {err}");
                None
            }
        };

        let variant = initial_variant(stored.as_deref(), host_prefers_dark);
        debug!(%variant, stored = ?stored, "initial theme");

        let mut controller = ThemeController {
            store,
            root,
            key,
            variant,
            subscribers: Subscribers::new(),
        };
        controller.commit();
        controller
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn palette(&self) -> &'static Palette {
        Palette::for_variant(self.variant)
    }

    pub fn toggle(&mut self) -> ThemeVariant {
        self.set_variant(self.variant.toggled());
        self.variant
    }

    pub fn set_variant(&mut self, variant: ThemeVariant) {
        if variant == self.variant {
            return;
        }

        debug!(from = %self.variant, to = %variant, "switching theme");
        self.variant = variant;
        self.commit();
        self.subscribers.notify(&variant);
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&ThemeVariant) -> anyhow::Result<()> + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // write the current variant out to the document root and to persistence.  neither failure
    // is fatal: the in-memory variant is the source of truth for this session
    fn commit(&mut self) {
        if let Err(err) = self.root.apply(self.variant, Palette::for_variant(self.variant)) {
            warn!("failed to apply theme tokens: {err}");
        }

        if let Err(err) = self.store.set(&self.key, self.variant.as_str()) {
            warn!("failed to persist theme preference: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn tokens_render_as_channel_triples() {
        assert_eq!(Hsl::new(260, 75, 25).to_string(), "260 75% 25%");

        let tokens = Palette::COSMIC_DARK.tokens();
        assert_eq!(tokens[0], ("--background", Hsl::new(260, 75, 25)));
        assert_eq!(tokens[7].0, "--neutral-dark");
    }

    #[test]
    fn stored_preference_wins() {
        let store = MemoryStore::with(THEME_KEY, "light");
        let theme = ThemeController::new(&store, RecordingRoot::default(), Some(true));

        assert_eq!(theme.variant(), ThemeVariant::Light);
        assert_eq!(theme.root().class.as_deref(), Some("light"));
    }

    #[test]
    fn garbage_or_missing_preference_defaults_dark() {
        let store = MemoryStore::with(THEME_KEY, "sepia");
        let theme = ThemeController::new(&store, RecordingRoot::default(), Some(false));
        assert_eq!(theme.variant(), ThemeVariant::Dark);

        let store = MemoryStore::new();
        let theme = ThemeController::new(&store, RecordingRoot::default(), None);
        assert_eq!(theme.variant(), ThemeVariant::Dark);
    }

    #[test]
    fn round_trip_through_persistence() {
        let store = MemoryStore::new();

        let mut theme = ThemeController::new(&store, RecordingRoot::default(), Some(true));
        assert_eq!(theme.root().class.as_deref(), Some("dark"));

        theme.toggle();
        assert_eq!(theme.root().class.as_deref(), Some("light"));
        assert_eq!(store.peek(THEME_KEY).as_deref(), Some("light"));

        drop(theme);

        let theme = ThemeController::new(&store, RecordingRoot::default(), Some(true));
        assert_eq!(theme.root().class.as_deref(), Some("light"));
    }

    #[test]
    fn every_toggle_flips_persists_and_restyles() {
        let store = MemoryStore::new();
        let mut theme = ThemeController::new(&store, RecordingRoot::default(), None);

        for _ in 0..5 {
            let before = theme.variant();
            let after = theme.toggle();

            assert_eq!(after, before.toggled());
            assert_eq!(store.peek(THEME_KEY).as_deref(), Some(after.as_str()));
            assert_eq!(theme.root().class.as_deref(), Some(after.css_class()));
            assert_eq!(
                theme.root().properties.get("--background"),
                Some(&Palette::for_variant(after).background.to_string())
            );
        }
    }

    #[test]
    fn broken_storage_still_themes_in_memory() {
        let store = MemoryStore::broken();
        let mut theme = ThemeController::new(&store, RecordingRoot::default(), Some(true));

        assert_eq!(theme.variant(), ThemeVariant::Dark);
        assert_eq!(theme.toggle(), ThemeVariant::Light);
        assert_eq!(theme.root().class.as_deref(), Some("light"));
        assert_eq!(theme.root().properties.len(), 8);
    }

    #[test]
    fn subscribers_hear_about_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let store = MemoryStore::new();
        let mut theme = ThemeController::new(&store, RecordingRoot::default(), None);

        let sink = seen.clone();
        theme.subscribe(move |v| {
            sink.borrow_mut().push(*v);
            Ok(())
        });

        theme.toggle();
        theme.set_variant(ThemeVariant::Light);
        theme.toggle();

        assert_eq!(*seen.borrow(), vec![ThemeVariant::Light, ThemeVariant::Dark]);
    }
}
