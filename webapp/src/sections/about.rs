use dioxus::prelude::*;

use common::{
    content::{BIO, STATS},
    motion::{fade_in_right, fade_in_up, scale_in, stagger_container},
    page::SectionId,
    reveal::RevealOptions,
};

use crate::{common::reveal::use_reveal, components::motion::Motion, sections::SectionHeading};

const BIO_ID: &str = "about-bio";

#[component]
pub fn About() -> Element {
    let heading = use_reveal(SectionId::About.anchor(), RevealOptions::default());
    let bio = use_reveal(BIO_ID, RevealOptions::new(0.3, false));

    let container = stagger_container();
    let shown = bio();

    rsx! {
        section { id: SectionId::About.anchor(),
            div { class: "container",
                SectionHeading {
                    accent: "About",
                    title: "Me",
                    subtitle: "Designer by eye, developer by trade.",
                    visible: heading(),
                }

                div { class: "about-grid",
                    Motion { variant: fade_in_right(), visible: shown,
                        div { class: "about-portrait", "HP" }
                    }

                    div { id: BIO_ID, class: "about-bio",
                        for (i, paragraph) in BIO.iter().enumerate() {
                            Motion { key: "{i}", variant: fade_in_up().staggered_by(&container, i), visible: shown,
                                p { "{paragraph}" }
                            }
                        }

                        div { class: "stats",
                            for (i, stat) in STATS.iter().enumerate() {
                                Motion {
                                    key: "{stat.label}",
                                    variant: scale_in().staggered_by(&container, BIO.len() + i),
                                    visible: shown,
                                    class: "stat",
                                    div { class: "stat-value", "{stat.value}" }
                                    div { class: "stat-label", "{stat.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
