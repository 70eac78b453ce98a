use std::{cell::RefCell, fmt, sync::LazyLock};

use api::contact::ContactMessage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use thiserror::Error;
use tracing::{Level, debug, error, instrument};

use crate::{
    EMAIL_REGEX,
    toast::{ToastBus, ToastKind, ToastOptions},
};

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon.";
pub const FAILED_TITLE: &str = "Message not sent";
pub const FAILED_DESCRIPTION: &str = "There was a problem sending your message. Please try again.";

// the pattern is a literal, so compiling it cannot fail at runtime
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    // the form control name, which is also the json key
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "Project Inquiry",
            Self::Message => "Tell me about your project...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Empty(ContactField),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    // every field non-empty after trimming, plus a plausible address
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        for field in ContactField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::Empty(field));
            }
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_owned()));
        }

        Ok(ContactMessage {
            name: self.name.trim().to_owned(),
            email: email.to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastResult {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    // a request is already in flight
    Ignored,
    Rejected(ValidationError),
    Started(ContactMessage),
}

// outbound half of the contact form
//
// the browser is single threaded, so implementations need not be Send
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn send(&self, message: &ContactMessage) -> anyhow::Result<()>;
}

// contact form state
//
// submission is split into begin() and finish() so that the host can hold the form in a
// RefCell or a signal without keeping it borrowed across the request.  between the two the
// form is inert: edits are refused and further submits are ignored
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    submitting: bool,
    last_result: Option<LastResult>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn get(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_result(&self) -> Option<&LastResult> {
        self.last_result.as_ref()
    }

    // returns false (and changes nothing) while a submission is in flight
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.submitting {
            return false;
        }

        *self.fields.slot(field) = value.into();
        true
    }

    pub fn begin(&mut self, toasts: &mut ToastBus, now: DateTime<Utc>) -> Submission {
        if self.submitting {
            debug!("submission already in flight, ignoring");
            return Submission::Ignored;
        }

        match self.fields.validate() {
            Ok(message) => {
                debug!(subject = %message.subject, "starting submission");
                self.submitting = true;
                Submission::Started(message)
            }
            Err(err) => {
                debug!("contact form rejected: {err}");
                toasts.publish(
                    ToastOptions::new(FAILED_TITLE)
                        .description(err.to_string())
                        .kind(ToastKind::Destructive),
                    now,
                );
                self.last_result = Some(LastResult {
                    ok: false,
                    message: err.to_string(),
                });
                Submission::Rejected(err)
            }
        }
    }

    pub fn finish(&mut self, outcome: anyhow::Result<()>, toasts: &mut ToastBus, now: DateTime<Utc>) {
        self.submitting = false;

        match outcome {
            Ok(()) => {
                toasts.publish(
                    ToastOptions::new(SENT_TITLE)
                        .description(SENT_DESCRIPTION)
                        .kind(ToastKind::Success),
                    now,
                );
                self.fields = ContactFields::default();
                self.last_result = Some(LastResult {
                    ok: true,
                    message: SENT_TITLE.to_owned(),
                });
            }
            Err(err) => {
                error!("contact submission failed: {err}");
                toasts.publish(
                    ToastOptions::new(FAILED_TITLE)
                        .description(FAILED_DESCRIPTION)
                        .kind(ToastKind::Destructive),
                    now,
                );
                self.last_result = Some(LastResult {
                    ok: false,
                    message: err.to_string(),
                });
            }
        }
    }
}

// the whole submission, for hosts that keep the form and the bus in RefCells.  neither
// cell is borrowed while the request is awaited.  returns true if a request was sent and
// succeeded
#[instrument(level=Level::DEBUG, skip_all)]
pub async fn submit<T: ContactTransport + ?Sized>(
    form: &RefCell<ContactForm>,
    transport: &T,
    toasts: &RefCell<ToastBus>,
    clock: impl Fn() -> DateTime<Utc>,
) -> bool {
    let started = form.borrow_mut().begin(&mut toasts.borrow_mut(), clock());

    let message = match started {
        Submission::Started(message) => message,
        Submission::Ignored | Submission::Rejected(_) => return false,
    };

    let outcome = transport.send(&message).await;
    let ok = outcome.is_ok();

    form.borrow_mut().finish(outcome, &mut toasts.borrow_mut(), clock());
    ok
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use chrono::TimeZone;
    use futures::executor::block_on;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Subject, "Hello");
        form.set(ContactField::Message, "Hi");
        form
    }

    // answers with a fixed outcome and counts what it was asked to send
    struct Scripted {
        status: u16,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl Scripted {
        fn new(status: u16) -> Self {
            Scripted {
                status,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactTransport for Scripted {
        async fn send(&self, message: &ContactMessage) -> anyhow::Result<()> {
            self.sent.borrow_mut().push(message.clone());
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(anyhow::Error::msg(format!("/api/contact returned {}", self.status)))
            }
        }
    }

    #[test]
    fn email_pattern_is_permissive() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co.uk"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@x.io"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn blank_fields_are_rejected_in_order() {
        let mut fields = filled().fields().clone();
        fields.subject = "   ".to_owned();
        assert_eq!(fields.validate(), Err(ValidationError::Empty(ContactField::Subject)));

        fields.name = String::new();
        assert_eq!(fields.validate(), Err(ValidationError::Empty(ContactField::Name)));
    }

    #[test]
    fn validation_trims_what_it_sends() {
        let mut form = filled();
        form.set(ContactField::Name, "  Ada  ");

        let message = form.fields().validate().unwrap();
        assert_eq!(message.name, "Ada");
    }

    #[test]
    fn successful_submit_clears_the_form() {
        let form = RefCell::new(filled());
        let toasts = RefCell::new(ToastBus::default());
        let transport = Scripted::new(200);

        assert!(block_on(submit(&form, &transport, &toasts, now)));

        let form = form.borrow();
        assert!(form.fields().is_empty());
        assert!(!form.is_submitting());
        assert!(form.last_result().unwrap().ok);

        let toasts = toasts.borrow();
        let toast = toasts.toasts().last().unwrap();
        assert_eq!(toast.title, SENT_TITLE);
        assert_eq!(toast.kind, ToastKind::Success);

        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(transport.sent.borrow()[0].email, "ada@example.com");
    }

    #[test]
    fn failed_submit_keeps_the_input() {
        let form = RefCell::new(filled());
        let before = form.borrow().fields().clone();
        let toasts = RefCell::new(ToastBus::default());

        assert!(!block_on(submit(&form, &Scripted::new(500), &toasts, now)));

        let form = form.borrow();
        assert_eq!(*form.fields(), before);
        assert!(!form.is_submitting());
        assert!(!form.last_result().unwrap().ok);

        let toasts = toasts.borrow();
        let toast = toasts.toasts().last().unwrap();
        assert_eq!(toast.title, FAILED_TITLE);
        assert_eq!(toast.description.as_deref(), Some(FAILED_DESCRIPTION));
        assert_eq!(toast.kind, ToastKind::Destructive);
    }

    #[test]
    fn invalid_input_never_reaches_the_transport() {
        let mut start = filled();
        start.set(ContactField::Email, "not-an-address");
        let form = RefCell::new(start);
        let toasts = RefCell::new(ToastBus::default());
        let transport = Scripted::new(200);

        assert!(!block_on(submit(&form, &transport, &toasts, now)));

        assert!(transport.sent.borrow().is_empty());
        assert!(!form.borrow().is_submitting());
        assert_eq!(form.borrow().get(ContactField::Email), "not-an-address");
        assert_eq!(toasts.borrow().toasts().last().unwrap().title, FAILED_TITLE);
    }

    #[test]
    fn form_is_inert_while_in_flight() {
        let mut form = filled();
        let mut toasts = ToastBus::default();

        assert!(matches!(form.begin(&mut toasts, now()), Submission::Started(_)));
        assert!(form.is_submitting());

        let snapshot = form.fields().clone();
        assert_eq!(form.begin(&mut toasts, now()), Submission::Ignored);
        assert!(!form.set(ContactField::Message, "changed my mind"));
        assert_eq!(*form.fields(), snapshot);
        assert!(toasts.toasts().is_empty());

        form.finish(Ok(()), &mut toasts, now());
        assert!(!form.is_submitting());
    }

    // the transport looks at the form from inside the request, the way a second click would
    struct Reentrant {
        form: Rc<RefCell<ContactForm>>,
        toasts: Rc<RefCell<ToastBus>>,
        saw_submitting: Cell<bool>,
        second: RefCell<Option<Submission>>,
    }

    #[async_trait(?Send)]
    impl ContactTransport for Reentrant {
        async fn send(&self, _message: &ContactMessage) -> anyhow::Result<()> {
            self.saw_submitting.set(self.form.borrow().is_submitting());
            let second = self.form.borrow_mut().begin(&mut self.toasts.borrow_mut(), now());
            *self.second.borrow_mut() = Some(second);
            Ok(())
        }
    }

    #[test]
    fn second_submit_during_request_is_a_no_op() {
        let form = Rc::new(RefCell::new(filled()));
        let toasts = Rc::new(RefCell::new(ToastBus::default()));
        let transport = Reentrant {
            form: form.clone(),
            toasts: toasts.clone(),
            saw_submitting: Cell::new(false),
            second: RefCell::new(None),
        };

        assert!(block_on(submit(&form, &transport, &toasts, now)));

        assert!(transport.saw_submitting.get());
        assert_eq!(*transport.second.borrow(), Some(Submission::Ignored));
        assert_eq!(toasts.borrow().toasts().len(), 1);
    }
}
