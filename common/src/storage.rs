use std::{cell::RefCell, collections::HashMap};

// host key-value store
//
// in the browser this is local storage; the trait exists so that the providers can be
// constructed against an in-memory map in tests.  both directions are fallible because
// local storage can be disabled, full, or throw on access in private browsing modes
pub trait KeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    // a store whose every access errors, like local storage with cookies blocked
    pub fn broken() -> Self {
        MemoryStore {
            items: RefCell::new(HashMap::new()),
            fail_reads: true,
            fail_writes: true,
        }
    }

    pub fn read_only(self) -> Self {
        MemoryStore {
            fail_writes: true,
            ..self
        }
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.fail_reads {
            return Err(anyhow::Error::msg(format!("read of {key} refused")));
        }

        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            return Err(anyhow::Error::msg(format!("write of {key} refused")));
        }

        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
