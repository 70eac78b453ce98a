use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::config::NavSettings;

// the five sections of the page, in document order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Portfolio,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Portfolio,
        SectionId::Skills,
        SectionId::Contact,
    ];

    // the element id, also the fragment used by in-page links
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Portfolio => "portfolio",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Portfolio => "Portfolio",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);

        match anchor {
            "hero" => Some(SectionId::Hero),
            "about" => Some(SectionId::About),
            "portfolio" | "projects" => Some(SectionId::Portfolio),
            "skills" => Some(SectionId::Skills),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown section anchor {0:?}")]
pub struct UnknownSection(String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::from_anchor(s).ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLayout {
    // inline links across the bar
    Expanded,
    // hamburger button with a full screen overlay
    Collapsed,
}

impl NavLayout {
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width >= breakpoint {
            NavLayout::Expanded
        } else {
            NavLayout::Collapsed
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "toggled nav menu");
        self.menu_open
    }

    // following a link from the overlay closes it
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

impl NavSettings {
    // the bar gets its solid background once the page has moved
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scrolled_threshold
    }

    pub fn show_scroll_to_top(&self, scroll_y: f64) -> bool {
        scroll_y > self.scroll_top_threshold
    }

    pub fn layout(&self, width: f64) -> NavLayout {
        NavLayout::for_width(width, self.breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_resolve_both_ways() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
            assert_eq!(section.href().parse::<SectionId>().unwrap(), section);
        }
    }

    #[test]
    fn projects_is_an_alias_for_portfolio() {
        assert_eq!(SectionId::from_anchor("projects"), Some(SectionId::Portfolio));
        assert_eq!(SectionId::from_anchor("#projects"), Some(SectionId::Portfolio));
        assert_eq!(SectionId::from_anchor("#testimonials"), None);
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn thresholds_are_strict() {
        let nav = NavSettings::default();

        assert!(!nav.is_scrolled(10.0));
        assert!(nav.is_scrolled(10.5));
        assert!(!nav.show_scroll_to_top(400.0));
        assert!(nav.show_scroll_to_top(401.0));
    }

    #[test]
    fn layout_switches_at_the_breakpoint() {
        let nav = NavSettings::default();

        assert_eq!(nav.layout(767.0), NavLayout::Collapsed);
        assert_eq!(nav.layout(768.0), NavLayout::Expanded);
    }

    #[test]
    fn overlay_links_close_the_menu() {
        let mut state = NavState::default();

        assert!(state.toggle_menu());
        state.close_menu();
        assert!(!state.menu_open);
        assert!(state.toggle_menu());
        assert!(!state.toggle_menu());
    }
}
