use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::{
    content::{HERO_BLURB, ORBIT_BADGES, OWNER, ROLES},
    motion::{fade_in_right, fade_in_up, letter_by_letter, orbit_rotation, particle_field, scale_in, stagger_container},
    page::SectionId,
};

use crate::{
    common::mount_rng,
    components::{motion::Motion, navigation::go_to},
};

const GREETING: &str = "Hello, I'm";
const PARTICLE_COUNT: usize = 30;
// each role holds the line for half of a six second cycle
const ROLE_PERIOD_MS: u32 = 3000;
const ORBIT_RADIUS_PX: u32 = 180;

#[component]
fn CtaButton(class: &'static str, target: SectionId, label: &'static str) -> Element {
    rsx! {
        a {
            class,
            href: target.href(),
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                go_to(target);
            },
            "{label}"
        }
    }
}

#[component]
fn OrbitStage() -> Element {
    let outer = orbit_rotation(20.0, true);
    let inner = orbit_rotation(25.0, false);
    let step = 360 / ORBIT_BADGES.len();

    rsx! {
        div { class: "orbit-stage",
            div { class: "orbit-ring", style: outer.css(),
                for (i, badge) in ORBIT_BADGES.iter().enumerate() {
                    div {
                        key: "{badge}",
                        class: "orbit-badge",
                        style: "transform: rotate({i * step}deg) translateX({ORBIT_RADIUS_PX}px) rotate(-{i * step}deg);",
                        "{badge}"
                    }
                }
            }
            div { class: "orbit-ring inner", style: inner.css() }
            div { class: "orbit-core", "H" }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let particles = use_hook(|| particle_field(PARTICLE_COUNT, &mut mount_rng()));
    let mut role = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            TimeoutFuture::new(ROLE_PERIOD_MS).await;
            role.with_mut(|r| *r = (*r + 1) % ROLES.len());
        }
    });

    let container = stagger_container();
    let current = role();

    rsx! {
        section { id: SectionId::Hero.anchor(), class: "hero",
            div { class: "particles",
                for (i, particle) in particles.iter().enumerate() {
                    div { key: "{i}", class: "particle", style: particle.style() }
                }
            }

            div { class: "container hero-grid",
                div {
                    p { class: "hero-greeting",
                        for (i, (c, variant)) in letter_by_letter(GREETING).into_iter().enumerate() {
                            Motion { key: "{i}", variant, visible: true, inline: true, class: "letter", "{c}" }
                        }
                    }

                    h1 { class: "hero-name",
                        Motion { variant: scale_in().staggered_by(&container, 0), visible: true, inline: true, class: "highlight",
                            "{OWNER}"
                        }
                    }

                    div { class: "hero-role",
                        // keyed on the role so every switch replays the letters
                        for (i, (c, variant)) in letter_by_letter(ROLES[current]).into_iter().enumerate() {
                            Motion { key: "{current}-{i}", variant, visible: true, inline: true, class: "letter", "{c}" }
                        }
                    }

                    Motion { variant: fade_in_up().staggered_by(&container, 1), visible: true,
                        p { class: "hero-blurb", "{HERO_BLURB}" }
                    }

                    Motion { variant: fade_in_up().staggered_by(&container, 2), visible: true, class: "hero-actions",
                        CtaButton { class: "btn btn-primary", target: SectionId::Portfolio, label: "View My Work" }
                        CtaButton { class: "btn btn-outline", target: SectionId::Contact, label: "Contact Me" }
                    }
                }

                Motion { variant: fade_in_right().delayed(500), visible: true,
                    OrbitStage {}
                }
            }

            div { class: "scroll-indicator",
                span { "Scroll Down" }
                i { class: "fas fa-chevron-down" }
            }
        }
    }
}
