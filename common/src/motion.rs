//! Named motion variants shared by the page sections.
//!
//! Everything here is data.  A [`Variant`] is a pair of poses plus a [`Transition`]; the
//! presentation layer picks a variant and asks it for inline styles, and never needs to
//! know which variant it was handed.

use std::fmt::Write;

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn opacity(self, opacity: f32) -> Self {
        Pose { opacity, ..self }
    }

    pub const fn x(self, x: f32) -> Self {
        Pose { x, ..self }
    }

    pub const fn y(self, y: f32) -> Self {
        Pose { y, ..self }
    }

    pub const fn scale(self, scale: f32) -> Self {
        Pose { scale, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({}) rotate({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
    // a cubic that overshoots slightly, standing in for an underdamped spring
    Overshoot,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "cubic-bezier(0, 0, 0.2, 1)",
            Self::EaseInOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            Self::Overshoot => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Tween {
        duration_ms: u32,
        delay_ms: u32,
        ease: Ease,
    },
    // unit mass
    Spring {
        damping: f32,
        stiffness: f32,
        delay_ms: u32,
    },
}

impl Transition {
    pub const fn tween(duration_ms: u32, ease: Ease) -> Self {
        Transition::Tween {
            duration_ms,
            delay_ms: 0,
            ease,
        }
    }

    pub const fn spring(damping: f32, stiffness: f32) -> Self {
        Transition::Spring {
            damping,
            stiffness,
            delay_ms: 0,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        match *self {
            Transition::Tween { delay_ms, .. } | Transition::Spring { delay_ms, .. } => delay_ms,
        }
    }

    pub fn with_delay(self, delay: u32) -> Self {
        match self {
            Transition::Tween { duration_ms, ease, .. } => Transition::Tween {
                duration_ms,
                delay_ms: delay,
                ease,
            },
            Transition::Spring { damping, stiffness, .. } => Transition::Spring {
                damping,
                stiffness,
                delay_ms: delay,
            },
        }
    }

    // css has no springs, so a spring becomes a tween lasting roughly its settling time:
    // 4 / (zeta * omega) = 8 / damping seconds when underdamped
    pub fn duration_ms(&self) -> u32 {
        match *self {
            Transition::Tween { duration_ms, .. } => duration_ms,
            Transition::Spring { damping, stiffness, .. } => {
                let damping = damping.max(0.1);
                let omega = stiffness.max(0.1).sqrt();
                let zeta = damping / (2.0 * omega);

                let secs = if zeta < 1.0 {
                    8.0 / damping
                } else {
                    4.0 / (omega * (zeta - (zeta * zeta - 1.0).sqrt()))
                };
                (secs * 1000.0).round().clamp(100.0, 3000.0) as u32
            }
        }
    }

    pub fn ease(&self) -> Ease {
        match *self {
            Transition::Tween { ease, .. } => ease,
            Transition::Spring { damping, stiffness, .. } => {
                if damping < 2.0 * stiffness.max(0.0).sqrt() {
                    Ease::Overshoot
                } else {
                    Ease::EaseOut
                }
            }
        }
    }

    pub fn css(&self) -> String {
        let (duration, delay, ease) = (self.duration_ms(), self.delay_ms(), self.ease().css());
        format!("transition: opacity {duration}ms {ease} {delay}ms, transform {duration}ms {ease} {delay}ms;")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_children_ms: u32,
}

impl Stagger {
    pub fn child_delay(&self, index: usize) -> u32 {
        self.delay_children_ms + self.stagger_children_ms * index as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
    pub stagger: Option<Stagger>,
}

impl Variant {
    pub fn pose(&self, visible: bool) -> Pose {
        if visible { self.visible } else { self.hidden }
    }

    pub fn style(&self, visible: bool) -> String {
        let mut style = self.pose(visible).css();
        style.push(' ');
        style.push_str(&self.transition.css());
        style
    }

    pub fn delayed(self, extra_ms: u32) -> Self {
        let delay = self.transition.delay_ms() + extra_ms;
        Variant {
            transition: self.transition.with_delay(delay),
            ..self
        }
    }

    // the variant for the index-th child of a staggering container
    pub fn staggered_by(self, container: &Variant, index: usize) -> Self {
        match container.stagger {
            Some(stagger) => self.delayed(stagger.child_delay(index)),
            None => self,
        }
    }
}

pub fn fade_in_up() -> Variant {
    Variant {
        hidden: Pose::REST.opacity(0.0).y(20.0),
        visible: Pose::REST,
        transition: Transition::tween(500, Ease::EaseOut),
        stagger: None,
    }
}

pub fn fade_in_right() -> Variant {
    Variant {
        hidden: Pose::REST.opacity(0.0).x(-50.0),
        visible: Pose::REST,
        transition: Transition::spring(12.0, 60.0),
        stagger: None,
    }
}

pub fn stagger_container() -> Variant {
    Variant {
        hidden: Pose::REST.opacity(0.0),
        visible: Pose::REST,
        transition: Transition::tween(300, Ease::EaseOut),
        stagger: Some(Stagger {
            delay_children_ms: 200,
            stagger_children_ms: 100,
        }),
    }
}

// also used for the highlighted name in the hero
pub fn scale_in() -> Variant {
    Variant {
        hidden: Pose::REST.opacity(0.0).scale(0.8),
        visible: Pose::REST,
        transition: Transition::spring(10.0, 100.0),
        stagger: None,
    }
}

pub const LETTER_DELAY_MS: u32 = 50;

pub fn letter(index: usize) -> Variant {
    Variant {
        hidden: Pose::REST.opacity(0.0).y(50.0),
        visible: Pose::REST,
        transition: Transition::spring(12.0, 70.0).with_delay(index as u32 * LETTER_DELAY_MS),
        stagger: None,
    }
}

pub fn letter_by_letter(text: &str) -> Vec<(char, Variant)> {
    text.chars().enumerate().map(|(i, c)| (c, letter(i))).collect()
}

// a decorative ring spinning forever
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub period_secs: f32,
    pub clockwise: bool,
}

impl Orbit {
    pub fn css(&self) -> String {
        let name = if self.clockwise { "orbit-cw" } else { "orbit-ccw" };
        format!("animation: {name} {}s linear infinite;", self.period_secs)
    }
}

pub fn orbit_rotation(period_secs: f32, clockwise: bool) -> Orbit {
    Orbit {
        period_secs: period_secs.clamp(20.0, 60.0),
        clockwise,
    }
}

// one drifting dot; positions are in viewport percent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub size_px: f32,
    pub blur_px: f32,
    pub opacity: [f32; 3],
    pub scale: [f32; 3],
    pub duration_secs: f32,
}

impl Particle {
    pub fn style(&self) -> String {
        let mut style = String::new();
        let _ = write!(
            style,
            "width: {s}px; height: {s}px; filter: blur({b}px); \
             --x0: {}vw; --y0: {}vh; --x1: {}vw; --y1: {}vh; \
             --o0: {}; --o1: {}; --o2: {}; --s0: {}; --s1: {}; --s2: {}; \
             animation: particle-drift {}s linear infinite;",
            self.start.0,
            self.start.1,
            self.end.0,
            self.end.1,
            self.opacity[0],
            self.opacity[1],
            self.opacity[2],
            self.scale[0],
            self.scale[1],
            self.scale[2],
            self.duration_secs,
            s = self.size_px,
            b = self.blur_px,
        );
        style
    }
}

pub fn particle_field<R: Rng>(n: usize, rng: &mut R) -> Vec<Particle> {
    (0..n)
        .map(|_| Particle {
            start: (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)),
            end: (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)),
            size_px: rng.random_range(2.0..7.0),
            blur_px: rng.random_range(0.0..1.0),
            opacity: [rng.random_range(0.1..0.4), 0.4, rng.random_range(0.1..0.4)],
            scale: [rng.random_range(0.1..0.4), rng.random_range(0.3..0.5), rng.random_range(0.1..0.4)],
            duration_secs: rng.random_range(10.0..=30.0),
        })
        .collect()
}

// preloader stars: a fixed position and a twinkle period
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Twinkle {
    pub top: f32,
    pub left: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
}

impl Twinkle {
    pub fn style(&self) -> String {
        format!(
            "top: {}%; left: {}%; animation: twinkle {}s ease-in-out {}s infinite;",
            self.top, self.left, self.duration_secs, self.delay_secs
        )
    }
}

pub fn star_field<R: Rng>(n: usize, rng: &mut R) -> Vec<Twinkle> {
    (0..n)
        .map(|_| Twinkle {
            top: rng.random_range(0.0..100.0),
            left: rng.random_range(0.0..100.0),
            duration_secs: rng.random_range(2.0..5.0),
            delay_secs: rng.random_range(0.0..2.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn fade_in_up_moves_twenty_pixels() {
        let v = fade_in_up();

        assert_eq!(v.hidden.opacity, 0.0);
        assert_eq!(v.hidden.y, 20.0);
        assert_eq!(v.visible, Pose::REST);
        assert_eq!(v.transition.duration_ms(), 500);
        assert!(v.style(false).starts_with("opacity: 0; transform: translate3d(0px, 20px, 0)"));
        assert!(v.style(true).contains("transition: opacity 500ms"));
    }

    #[test]
    fn springs_settle_in_plausible_time() {
        let right = fade_in_right().transition;
        assert_eq!(right.duration_ms(), 667);
        assert_eq!(right.ease(), Ease::Overshoot);

        let stiff = Transition::spring(40.0, 100.0);
        assert_eq!(stiff.ease(), Ease::EaseOut);
        assert!(stiff.duration_ms() >= 100);
    }

    #[test]
    fn letters_are_fifty_ms_apart() {
        let letters = letter_by_letter("Hello");

        assert_eq!(letters.len(), 5);
        assert_eq!(letters[0].0, 'H');
        assert_eq!(letters[0].1.transition.delay_ms(), 0);
        assert_eq!(letters[4].1.transition.delay_ms(), 200);
        assert_eq!(letters[4].1.hidden.y, 50.0);
    }

    #[test]
    fn stagger_delays_children() {
        let container = stagger_container();
        let child = fade_in_up();

        assert_eq!(child.staggered_by(&container, 0).transition.delay_ms(), 200);
        assert_eq!(child.staggered_by(&container, 3).transition.delay_ms(), 500);
        assert_eq!(child.staggered_by(&fade_in_up(), 3).transition.delay_ms(), 0);
    }

    #[test]
    fn orbit_period_is_kept_in_range() {
        assert_eq!(orbit_rotation(5.0, true).period_secs, 20.0);
        assert_eq!(orbit_rotation(25.0, false).css(), "animation: orbit-ccw 25s linear infinite;");
    }

    #[test]
    fn particles_respect_their_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let field = particle_field(200, &mut rng);

        assert_eq!(field.len(), 200);
        for p in &field {
            assert!((10.0..=30.0).contains(&p.duration_secs));
            assert!((2.0..7.0).contains(&p.size_px));
            assert!((0.0..100.0).contains(&p.start.0) && (0.0..100.0).contains(&p.end.1));
            assert!(p.style().contains("animation: particle-drift"));
        }
    }

    #[test]
    fn stars_twinkle_for_two_to_five_seconds() {
        let mut rng = SmallRng::seed_from_u64(42);
        for star in star_field(50, &mut rng) {
            assert!((2.0..5.0).contains(&star.duration_secs));
            assert!(star.style().starts_with("top: "));
        }
    }
}
