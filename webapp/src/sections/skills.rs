use dioxus::prelude::*;

use common::{
    content::{SKILL_CATEGORIES, SKILLS, SkillCategory, SkillItem},
    motion::{fade_in_up, scale_in, stagger_container},
    page::SectionId,
    reveal::RevealOptions,
};

use crate::{common::reveal::use_reveal, components::motion::Motion, sections::SectionHeading};

// bars fill one after another, this far apart
const BAR_STAGGER_MS: usize = 200;

#[component]
fn SkillCard(index: usize, category: SkillCategory, visible: bool) -> Element {
    let list_id = format!("skill-list-{index}");
    let filled = use_reveal(list_id.clone(), RevealOptions::new(0.8, false));
    let container = stagger_container();
    let fill = filled();

    rsx! {
        Motion { variant: fade_in_up().staggered_by(&container, index), visible, class: "skill-category",
            h3 {
                i { class: category.icon }
                "{category.name}"
            }
            ul { id: list_id, style: "list-style: none;",
                for (row, item) in category.items.iter().enumerate() {
                    li { key: "{item.name}", class: "skill-row",
                        div { class: "skill-row-label",
                            span { "{item.name}" }
                            span { "{item.proficiency}%" }
                        }
                        div { class: "progress",
                            div {
                                class: "progress-bar",
                                style: bar_style(fill, row, item),
                            }
                        }
                    }
                }
            }
        }
    }
}

// bars sit at zero until their list is in view, then grow to the proficiency
fn bar_style(filled: bool, row: usize, item: &SkillItem) -> String {
    let width = if filled { item.width_css() } else { String::from("0%") };
    format!("width: {width}; transition-delay: {}ms;", row * BAR_STAGGER_MS)
}

#[component]
pub fn Skills() -> Element {
    let in_view = use_reveal(SectionId::Skills.anchor(), RevealOptions::new(0.2, false));

    let container = stagger_container();
    let shown = in_view();

    rsx! {
        section { id: SectionId::Skills.anchor(),
            div { class: "container",
                SectionHeading {
                    accent: "My",
                    title: "Skills",
                    subtitle: "My technical toolkit encompasses a range of technologies that enable me to bring creative visions to life.",
                    visible: shown,
                }

                div { class: "skill-chips",
                    for (n, skill) in SKILLS.iter().enumerate() {
                        Motion { key: "{skill.name}", variant: scale_in().staggered_by(&container, n), visible: shown, class: "skill-chip",
                            i { class: "{skill.icon} {skill.color}" }
                            span { "{skill.name}" }
                            small { "{skill.level}" }
                        }
                    }
                }

                div { class: "skill-categories",
                    for (index, category) in SKILL_CATEGORIES.iter().enumerate() {
                        SkillCard { key: "{category.name}", index, category: *category, visible: shown }
                    }
                }
            }
        }
    }
}
