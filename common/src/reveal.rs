use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub threshold: f64,
    pub once: bool,
}

impl RevealOptions {
    pub fn new(threshold: f64, once: bool) -> Self {
        RevealOptions {
            threshold: clamp_threshold(threshold),
            once,
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        RevealOptions {
            threshold: 0.1,
            once: false,
        }
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

// element bounds in viewport coordinates, as reported by getBoundingClientRect()
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Rect { top, bottom }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

// the fraction of the element that lies inside [0, viewport_height]
//
// this is what the scroll fallback feeds to Reveal::observe when there is no
// IntersectionObserver to do it for us
pub fn visible_ratio(rect: Rect, viewport_height: f64) -> f64 {
    let visible = rect.bottom.min(viewport_height) - rect.top.max(0.0);
    if visible <= 0.0 {
        return 0.0;
    }

    let height = rect.height();
    if height <= 0.0 {
        // a zero-height element straddling the viewport counts as fully visible
        return 1.0;
    }

    (visible / height).min(1.0)
}

// per-element visibility latch
//
// in_view follows the most recent intersection sample.  with once set, the first entry
// latches it to true and the reveal detaches, after which samples are ignored
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    options: RevealOptions,
    in_view: bool,
    attached: bool,
}

impl Reveal {
    pub fn new(options: RevealOptions) -> Self {
        Reveal {
            options: RevealOptions::new(options.threshold, options.once),
            in_view: false,
            attached: true,
        }
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // feed one intersection ratio; returns true if in_view changed
    pub fn observe(&mut self, ratio: f64) -> bool {
        if !self.attached {
            return false;
        }

        let entering = if self.options.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.options.threshold
        };

        match (self.in_view, entering) {
            (false, true) => {
                self.in_view = true;
                if self.options.once {
                    debug!("reveal latched, detaching");
                    self.attached = false;
                }
                true
            }
            (true, false) if !self.options.once => {
                self.in_view = false;
                true
            }
            _ => false,
        }
    }

    // an observer that could not be installed must never leave content hidden
    pub fn degrade(&mut self) {
        debug!("reveal degraded to always visible");
        self.in_view = true;
        self.attached = false;
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn repeating_reveal_follows_the_threshold() {
        let mut reveal = Reveal::new(RevealOptions::new(0.2, false));

        assert!(!reveal.observe(0.1));
        assert!(reveal.observe(0.2));
        assert!(reveal.in_view());
        assert!(!reveal.observe(0.9));
        assert!(reveal.observe(0.05));
        assert!(!reveal.in_view());
        assert!(reveal.is_attached());
    }

    #[test]
    fn once_latches_and_detaches() {
        let mut reveal = Reveal::new(RevealOptions::new(0.5, true));

        assert!(reveal.observe(0.6));
        assert!(!reveal.is_attached());
        assert!(!reveal.observe(0.0));
        assert!(reveal.in_view());
    }

    #[test]
    fn zero_threshold_means_any_pixel() {
        let mut reveal = Reveal::new(RevealOptions::new(0.0, false));

        assert!(!reveal.observe(0.0));
        assert!(reveal.observe(0.001));
    }

    #[test]
    fn thresholds_are_clamped() {
        assert_eq!(RevealOptions::new(3.0, false).threshold, 1.0);
        assert_eq!(RevealOptions::new(-1.0, false).threshold, 0.0);
        assert_eq!(RevealOptions::new(f64::NAN, false).threshold, 0.0);
    }

    #[test]
    fn degraded_reveal_is_permanently_visible() {
        let mut reveal = Reveal::default();
        reveal.degrade();

        assert!(reveal.in_view());
        assert!(!reveal.observe(0.0));
        assert!(reveal.in_view());
    }

    #[test]
    fn ratio_from_rects() {
        assert_eq!(visible_ratio(Rect::new(-100.0, 100.0), 800.0), 0.5);
        assert_eq!(visible_ratio(Rect::new(100.0, 300.0), 800.0), 1.0);
        assert_eq!(visible_ratio(Rect::new(700.0, 900.0), 800.0), 0.5);
        assert_eq!(visible_ratio(Rect::new(900.0, 1200.0), 800.0), 0.0);
        assert_eq!(visible_ratio(Rect::new(-500.0, -10.0), 800.0), 0.0);
    }

    proptest! {
        #[test]
        fn in_view_reflects_the_latest_sample(
            threshold in 0.01f64..=1.0,
            samples in proptest::collection::vec(0.0f64..=1.0, 1..50),
        ) {
            let mut reveal = Reveal::new(RevealOptions::new(threshold, false));
            for ratio in &samples {
                reveal.observe(*ratio);
                prop_assert_eq!(reveal.in_view(), *ratio >= threshold);
            }
        }

        #[test]
        fn once_never_resets(
            threshold in 0.01f64..=1.0,
            samples in proptest::collection::vec(0.0f64..=1.0, 1..50),
        ) {
            let mut reveal = Reveal::new(RevealOptions::new(threshold, true));
            let mut entered = false;
            for ratio in &samples {
                reveal.observe(*ratio);
                entered |= *ratio >= threshold;
                prop_assert_eq!(reveal.in_view(), entered);
            }
        }
    }
}
