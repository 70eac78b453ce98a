use dioxus::prelude::*;

use common::{
    content::{ALL_PROJECTS_URL, PROJECTS, Project},
    motion::{fade_in_up, stagger_container},
    page::SectionId,
    reveal::RevealOptions,
};

use crate::{common::reveal::use_reveal, components::motion::Motion, sections::SectionHeading};

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "project-card",
            img { src: project.image_url, alt: project.title, loading: "lazy" }
            div { class: "project-body",
                h3 { "{project.title}" }
                p { "{project.description}" }
                div { class: "tags",
                    for tech in project.technologies {
                        span { key: "{tech}", class: "tag", "{tech}" }
                    }
                }
                div { class: "project-links",
                    a { href: project.live_url, target: "_blank", rel: "noopener noreferrer",
                        i { class: "fas fa-external-link-alt" }
                        " Live Demo"
                    }
                    a { href: project.source_url, target: "_blank", rel: "noopener noreferrer",
                        i { class: "fab fa-github" }
                        " Source"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    let in_view = use_reveal(SectionId::Portfolio.anchor(), RevealOptions::new(0.1, false));

    let container = stagger_container();
    let shown = in_view();

    rsx! {
        section { id: SectionId::Portfolio.anchor(),
            div { class: "container",
                SectionHeading {
                    accent: "My",
                    title: "Projects",
                    subtitle: "A selection of interactive and immersive work.",
                    visible: shown,
                }

                div { class: "project-grid",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        Motion { key: "{project.title}", variant: fade_in_up().staggered_by(&container, i), visible: shown,
                            ProjectCard { project: *project }
                        }
                    }
                }

                div { class: "portfolio-more",
                    a { class: "btn btn-outline", href: ALL_PROJECTS_URL, target: "_blank", rel: "noopener noreferrer",
                        "View All Projects"
                    }
                }
            }
        }
    }
}
