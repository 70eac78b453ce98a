use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reveal::Rect;

// the horizontal strip of the viewport that decides which section is "current"
//
// by default this is a one pixel line 150px from the top, just below the fixed navbar
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

impl Band {
    pub fn new(top: f64, height: f64) -> Self {
        Band {
            top,
            bottom: top + height.max(0.0),
        }
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        rect.top <= self.top && rect.bottom >= self.top
    }
}

impl Default for Band {
    fn default() -> Self {
        Band::new(150.0, 1.0)
    }
}

// first section (in document order) whose rect covers the band, falling back to the first
// section when the reader is above all of them
pub fn active_section<Id: Copy>(sections: &[(Id, Rect)], band: Band) -> Option<Id> {
    sections
        .iter()
        .find(|(_, rect)| band.contains(rect))
        .or_else(|| sections.first())
        .map(|(id, _)| *id)
}

#[derive(Clone, Debug)]
pub struct ScrollSpy<Id> {
    sections: Vec<Id>,
    band: Band,
    active: Option<Id>,
}

impl<Id: Copy + PartialEq + std::fmt::Debug> ScrollSpy<Id> {
    pub fn new(sections: impl Into<Vec<Id>>, band: Band) -> Self {
        let sections = sections.into();
        let active = sections.first().copied();

        ScrollSpy {
            sections,
            band,
            active,
        }
    }

    pub fn sections(&self) -> &[Id] {
        &self.sections
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn active(&self) -> Option<Id> {
        self.active
    }

    // recompute from fresh measurements; sections the host cannot measure (not mounted yet)
    // are skipped.  returns true if the active section changed
    pub fn update(&mut self, mut measure: impl FnMut(Id) -> Option<Rect>) -> bool {
        let measured: Vec<(Id, Rect)> = self
            .sections
            .iter()
            .filter_map(|id| measure(*id).map(|rect| (*id, rect)))
            .collect();

        let active = active_section(&measured, self.band).or_else(|| self.sections.first().copied());

        if active == self.active {
            return false;
        }

        debug!(from = ?self.active, to = ?active, "active section changed");
        self.active = active;
        true
    }
}

// at most one recomputation per animation frame
//
// request() answers "should I schedule a frame?"; it is true only for the first scroll
// event since the last frame ran
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }

        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum S {
        Hero,
        About,
        Portfolio,
        Skills,
        Contact,
    }

    const PAGE: [(S, f64); 5] = [
        (S::Hero, 0.0),
        (S::About, 800.0),
        (S::Portfolio, 1600.0),
        (S::Skills, 2400.0),
        (S::Contact, 3200.0),
    ];

    // document offsets -> viewport rects at the given scroll position
    fn measure_at(scroll_y: f64) -> impl FnMut(S) -> Option<Rect> {
        move |id| {
            PAGE.iter()
                .find(|(s, _)| *s == id)
                .map(|(_, y)| Rect::new(y - scroll_y, y + 800.0 - scroll_y))
        }
    }

    #[test]
    fn five_section_page() {
        let mut spy = ScrollSpy::new(PAGE.map(|(s, _)| s).to_vec(), Band::default());
        assert_eq!(spy.active(), Some(S::Hero));

        spy.update(measure_at(50.0));
        assert_eq!(spy.active(), Some(S::Hero));

        assert!(spy.update(measure_at(900.0)));
        assert_eq!(spy.active(), Some(S::About));

        spy.update(measure_at(3200.0));
        assert_eq!(spy.active(), Some(S::Contact));
    }

    #[test]
    fn above_every_section_falls_back_to_the_first() {
        let sections = [(S::About, Rect::new(400.0, 800.0)), (S::Skills, Rect::new(800.0, 1600.0))];
        assert_eq!(active_section(&sections, Band::default()), Some(S::About));
        assert_eq!(active_section::<S>(&[], Band::default()), None);
    }

    #[test]
    fn ties_go_to_document_order() {
        let sections = [(S::Hero, Rect::new(0.0, 150.0)), (S::About, Rect::new(150.0, 900.0))];
        assert_eq!(active_section(&sections, Band::default()), Some(S::Hero));
    }

    #[test]
    fn unmeasurable_sections_are_skipped() {
        let mut spy = ScrollSpy::new(vec![S::Hero, S::About], Band::default());
        spy.update(|id| match id {
            S::Hero => None,
            _ => Some(Rect::new(-10.0, 500.0)),
        });
        assert_eq!(spy.active(), Some(S::About));
    }

    #[test]
    fn throttle_lets_one_frame_through() {
        let mut throttle = FrameThrottle::new();

        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());

        throttle.complete();
        assert!(throttle.request());
    }

    proptest! {
        #[test]
        fn active_is_first_band_hit_or_first_id(
            scroll_y in 0.0f64..4500.0,
            band_top in 0.0f64..400.0,
        ) {
            let band = Band::new(band_top, 1.0);
            let mut spy = ScrollSpy::new(PAGE.map(|(s, _)| s).to_vec(), band);
            spy.update(measure_at(scroll_y));

            let expected = PAGE
                .iter()
                .find(|(_, y)| y - scroll_y <= band_top && y + 800.0 - scroll_y >= band_top)
                .map(|(s, _)| *s)
                .unwrap_or(S::Hero);

            prop_assert_eq!(spy.active(), Some(expected));
        }
    }
}
