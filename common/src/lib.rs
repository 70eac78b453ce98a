use std::fmt::Debug;

use tracing::warn;

pub mod config;
pub mod contact;
pub mod content;
pub mod motion;
pub mod page;
pub mod preloader;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod toast;

// string validation
//
// this mirrors the browser's own type=email check closely enough: something, an @, something,
// a dot, something.  the server (if there ever is one) is free to be stricter
pub const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T) -> anyhow::Result<()>>;

// subscriber registry
//
// the providers (theme, toasts) are plain structs owned by whoever mounts them, so instead of
// an ambient event bus each one carries its own list of listeners.  a listener that fails is
// logged and skipped; it never prevents the others from hearing about the change
pub struct Subscribers<T> {
    next: u64,
    callbacks: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Subscribers {
            next: 0,
            callbacks: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&T) -> anyhow::Result<()> + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;

        self.callbacks.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(other, _)| *other != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, value: &T) {
        for (id, callback) in self.callbacks.iter_mut() {
            if let Err(err) = callback(value) {
                warn!(subscriber = id.0, "subscriber failed: {err}");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::*;

    #[test]
    fn failing_subscriber_does_not_starve_the_rest() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscribers::<u32>::new();

        let first = seen.clone();
        subs.subscribe(move |v| {
            first.borrow_mut().push(("first", *v));
            Ok(())
        });
        subs.subscribe(|_| Err(anyhow::Error::msg("boom")));
        let last = seen.clone();
        subs.subscribe(move |v| {
            last.borrow_mut().push(("last", *v));
            Ok(())
        });

        subs.notify(&7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("last", 7)]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let count = Rc::new(Cell::new(0));
        let mut subs = Subscribers::<()>::new();

        let a = count.clone();
        let id = subs.subscribe(move |_| {
            a.set(a.get() + 1);
            Ok(())
        });
        let b = count.clone();
        subs.subscribe(move |_| {
            b.set(b.get() + 10);
            Ok(())
        });

        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));

        subs.notify(&());
        assert_eq!(count.get(), 10);
        assert_eq!(subs.len(), 1);
    }
}
