use async_trait::async_trait;
use dioxus::prelude::*;
use tracing::{Level, instrument};

use api::contact::{ContactMessage, send_contact};
use common::{
    config::SiteConfig,
    contact::{ContactField, ContactForm, ContactTransport, Submission},
    content::{CONTACT_INFO, SOCIAL_LINKS},
    motion::{fade_in_right, fade_in_up},
    page::SectionId,
    reveal::RevealOptions,
};

use crate::{
    common::{dom::now, reveal::use_reveal, toast::{Toasts, use_toasts}},
    components::motion::Motion,
    sections::SectionHeading,
};

pub struct HttpTransport {
    endpoint: String,
}

#[async_trait(?Send)]
impl ContactTransport for HttpTransport {
    async fn send(&self, message: &ContactMessage) -> anyhow::Result<()> {
        send_contact(&self.endpoint, message).await
    }
}

// the two halves of a submission run against the signals directly so that nothing is
// borrowed while the request is in flight
#[instrument(level=Level::DEBUG, skip_all)]
async fn submit(mut form: Signal<ContactForm>, toasts: Toasts, transport: HttpTransport) {
    let mut bus = toasts.bus();

    let submission = form.write().begin(&mut bus.write(), now());
    let Submission::Started(message) = submission else {
        return;
    };

    let outcome = transport.send(&message).await;
    form.write().finish(outcome, &mut bus.write(), now());
}

#[component]
fn Field(field: ContactField, form: Signal<ContactForm>, wide: bool) -> Element {
    let mut form = form;
    let value = form.read().get(field).to_owned();
    let disabled = form.read().is_submitting();
    let input_id = format!("contact-{}", field.name());

    rsx! {
        div { class: if wide { "field wide" } else { "field" },
            label { r#for: input_id.clone(), "{field.label()}" }
            if field == ContactField::Message {
                textarea {
                    id: input_id.clone(),
                    name: field.name(),
                    rows: "5",
                    placeholder: field.placeholder(),
                    disabled,
                    value,
                    oninput: move |event| {
                        form.write().set(field, event.value());
                    },
                }
            } else {
                input {
                    id: input_id.clone(),
                    name: field.name(),
                    r#type: if field == ContactField::Email { "email" } else { "text" },
                    placeholder: field.placeholder(),
                    disabled,
                    value,
                    oninput: move |event| {
                        form.write().set(field, event.value());
                    },
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();
    let in_view = use_reveal(SectionId::Contact.anchor(), RevealOptions::new(0.1, false));

    let state = use_signal(ContactForm::new);
    let toasts = use_toasts();

    let shown = in_view();
    let submitting = state.read().is_submitting();
    let last_result = state.read().last_result().cloned();

    rsx! {
        section { id: SectionId::Contact.anchor(),
            div { class: "container",
                SectionHeading {
                    accent: "Get In",
                    title: "Touch",
                    subtitle: "Have a project in mind or just want to say hello? Send me a message.",
                    visible: shown,
                }

                div { class: "contact-grid",
                    Motion { variant: fade_in_right(), visible: shown, class: "contact-info",
                        for info in CONTACT_INFO {
                            div { key: "{info.label}", class: "info-item",
                                i { class: info.icon }
                                div {
                                    div { class: "info-label", "{info.label}" }
                                    if let Some(href) = info.href {
                                        a { href, target: "_blank", rel: "noopener noreferrer", "{info.value}" }
                                    } else {
                                        span { "{info.value}" }
                                    }
                                }
                            }
                        }

                        div { class: "socials",
                            for link in SOCIAL_LINKS {
                                a {
                                    key: "{link.name}",
                                    class: "social",
                                    href: link.url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    aria_label: link.name,
                                    i { class: link.icon }
                                }
                            }
                        }
                    }

                    Motion { variant: fade_in_up().delayed(200), visible: shown,
                        form {
                            class: "contact-form",
                            novalidate: true,
                            onsubmit: move |_| {
                                let transport = HttpTransport {
                                    endpoint: config.contact.endpoint.clone(),
                                };
                                async move { submit(state, toasts, transport).await }
                            },

                            Field { field: ContactField::Name, form: state, wide: false }
                            Field { field: ContactField::Email, form: state, wide: false }
                            Field { field: ContactField::Subject, form: state, wide: true }
                            Field { field: ContactField::Message, form: state, wide: true }

                            button { class: "btn btn-primary", r#type: "submit", disabled: submitting,
                                if submitting {
                                    span { class: "spinner" }
                                    "Sending..."
                                } else {
                                    i { class: "fas fa-paper-plane" }
                                    "Send Message"
                                }
                            }

                            if let Some(result) = last_result {
                                p {
                                    class: if result.ok { "form-status ok" } else { "form-status failed" },
                                    role: "status",
                                    "{result.message}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
