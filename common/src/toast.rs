use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{SubscriptionId, Subscribers};

pub const DEFAULT_LIMIT: usize = 3;

pub fn default_ttl() -> TimeDelta {
    TimeDelta::seconds(5)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Destructive,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
            Self::Destructive => "toast toast-destructive",
        }
    }
}

// toasts are immutable once published; the only thing that happens to one afterwards is
// that it goes away
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: Option<String>,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
    pub ttl: TimeDelta,
}

impl Toast {
    pub fn deadline(&self) -> DateTime<Utc> {
        self.created_at + self.ttl
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastOptions {
    title: String,
    description: Option<String>,
    kind: ToastKind,
    ttl: Option<TimeDelta>,
}

impl ToastOptions {
    pub fn new(title: impl Into<String>) -> Self {
        ToastOptions {
            title: title.into(),
            description: None,
            kind: ToastKind::default(),
            ttl: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn ttl(mut self, ttl: TimeDelta) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

// process-wide queue of transient notifications
//
// the bus owns the ordered list (newest last) and every toast's deadline.  it does not own
// a timer: whoever hosts it calls expire() when next_deadline() comes around, which keeps
// the bus deterministic and lets the host cancel its single pending timer on teardown
#[derive(Debug)]
pub struct ToastBus {
    limit: usize,
    default_ttl: TimeDelta,
    next_id: u64,
    toasts: Vec<Toast>,
    subscribers: Subscribers<Vec<Toast>>,
}

impl ToastBus {
    pub fn new(limit: usize, default_ttl: TimeDelta) -> Self {
        ToastBus {
            limit: limit.max(1),
            default_ttl,
            next_id: 0,
            toasts: Vec::new(),
            subscribers: Subscribers::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn publish(&mut self, options: ToastOptions, now: DateTime<Utc>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let toast = Toast {
            id,
            title: options.title,
            description: options.description,
            kind: options.kind,
            created_at: now,
            ttl: options.ttl.unwrap_or(self.default_ttl),
        };
        debug!(%id, title = %toast.title, kind = ?toast.kind, "publishing toast");

        self.toasts.push(toast);

        if self.toasts.len() > self.limit {
            let evicted: Vec<ToastId> = self
                .toasts
                .drain(..self.toasts.len() - self.limit)
                .map(|t| t.id)
                .collect();
            debug!(?evicted, "toast limit reached");
        }

        self.changed();
        id
    }

    // returns false if the toast was already gone (expired, evicted or dismissed)
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);

        if self.toasts.len() == before {
            return false;
        }

        debug!(%id, "dismissed toast");
        self.changed();
        true
    }

    pub fn expire(&mut self, now: DateTime<Utc>) -> Vec<ToastId> {
        let expired: Vec<ToastId> = self
            .toasts
            .iter()
            .filter(|t| t.deadline() <= now)
            .map(|t| t.id)
            .collect();

        if !expired.is_empty() {
            self.toasts.retain(|t| t.deadline() > now);
            debug!(?expired, "expired toasts");
            self.changed();
        }

        expired
    }

    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.toasts.iter().map(Toast::deadline).min()
    }

    pub fn clear(&mut self) {
        if !self.toasts.is_empty() {
            self.toasts.clear();
            self.changed();
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Vec<Toast>) -> anyhow::Result<()> + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn changed(&mut self) {
        self.subscribers.notify(&self.toasts);
    }
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, default_ttl())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashSet, rc::Rc};

    use chrono::TimeZone;
    use proptest::prelude::*;

    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    fn titles(bus: &ToastBus) -> Vec<&str> {
        bus.toasts().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn defaults_are_info_and_five_seconds() {
        let mut bus = ToastBus::default();
        let id = bus.publish(ToastOptions::new("hello"), at(0));

        let toast = bus.get(id).unwrap();
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.ttl, TimeDelta::seconds(5));
        assert_eq!(toast.description, None);
    }

    #[test]
    fn fourth_toast_evicts_the_first() {
        let mut bus = ToastBus::new(3, default_ttl());

        for (i, title) in ["T1", "T2", "T3", "T4"].into_iter().enumerate() {
            bus.publish(ToastOptions::new(title), at(i as i64));
        }

        assert_eq!(titles(&bus), vec!["T2", "T3", "T4"]);
    }

    #[test]
    fn toasts_expire_at_their_own_deadline() {
        let mut bus = ToastBus::default();
        let short = bus.publish(ToastOptions::new("short").ttl(TimeDelta::milliseconds(1000)), at(0));
        let long = bus.publish(ToastOptions::new("long"), at(0));

        assert_eq!(bus.next_deadline(), Some(at(1000)));
        assert!(bus.expire(at(999)).is_empty());
        assert_eq!(bus.expire(at(1000)), vec![short]);

        assert_eq!(bus.next_deadline(), Some(at(5000)));
        assert_eq!(bus.expire(at(5000)), vec![long]);
        assert_eq!(bus.next_deadline(), None);
    }

    #[test]
    fn dismiss_removes_and_cancels() {
        let mut bus = ToastBus::default();
        let id = bus.publish(ToastOptions::new("bye").kind(ToastKind::Destructive), at(0));

        assert!(bus.dismiss(id));
        assert!(!bus.dismiss(id));
        assert_eq!(bus.next_deadline(), None);
        assert!(bus.expire(at(10_000)).is_empty());
    }

    #[test]
    fn subscribers_see_the_ordered_list() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = ToastBus::default();

        let sink = seen.clone();
        bus.subscribe(move |list| {
            sink.borrow_mut().push(list.iter().map(|t| t.title.clone()).collect::<Vec<_>>());
            Ok(())
        });
        bus.subscribe(|_| Err(anyhow::Error::msg("renderer fell over")));

        let a = bus.publish(ToastOptions::new("a"), at(0));
        bus.publish(ToastOptions::new("b"), at(1));
        bus.dismiss(a);

        assert_eq!(
            *seen.borrow(),
            vec![vec!["a".to_owned()], vec!["a".to_owned(), "b".to_owned()], vec!["b".to_owned()]]
        );
    }

    proptest! {
        #[test]
        fn ids_are_fresh_and_limit_holds(
            ttls in proptest::collection::vec(1i64..10_000, 1..40),
            limit in 1usize..6,
        ) {
            let mut bus = ToastBus::new(limit, default_ttl());
            let mut issued = HashSet::new();

            for (i, ttl) in ttls.iter().enumerate() {
                let now = at(i as i64 * 10);
                let live: HashSet<ToastId> = bus.toasts().iter().map(|t| t.id).collect();

                let id = bus.publish(ToastOptions::new(format!("t{i}")).ttl(TimeDelta::milliseconds(*ttl)), now);

                prop_assert!(!live.contains(&id));
                prop_assert!(issued.insert(id));
                prop_assert!(bus.toasts().len() <= limit);
                prop_assert_eq!(bus.toasts().last().map(|t| t.id), Some(id));

                bus.expire(now);
            }

            // after every ttl has run out, nothing is left
            bus.expire(at(ttls.len() as i64 * 10 + 10_000));
            prop_assert!(bus.toasts().is_empty());
        }
    }
}
