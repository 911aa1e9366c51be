//! Text signals: named string values addressed by stable ids.

use hashbrown::HashMap;
use log::debug;

use crate::error::{Result, TransitionError};
use crate::ids::{IdAllocator, SignalId};

/// A named, mutable string value driven by running steps.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSignal {
    pub id: SignalId,
    pub name: String,
    pub value: String,
}

/// Arena of text signals with a name lookup table.
#[derive(Debug, Default)]
pub struct SignalStore {
    ids: IdAllocator,
    slots: Vec<Option<TextSignal>>,
    names: HashMap<String, SignalId>,
}

impl SignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new signal. Names are unique among live signals.
    pub fn create(&mut self, name: &str, initial: &str) -> Result<SignalId> {
        if self.names.contains_key(name) {
            return Err(TransitionError::DuplicateSignal {
                name: name.to_string(),
            });
        }
        let id = self.ids.alloc_signal()?;
        debug!("signal {name:?} -> {id:?}");
        self.slots.push(Some(TextSignal {
            id,
            name: name.to_string(),
            value: initial.to_string(),
        }));
        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn lookup(&self, name: &str) -> Result<SignalId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| TransitionError::UnknownSignal {
                name: name.to_string(),
            })
    }

    pub fn signal(&self, id: SignalId) -> Result<&TextSignal> {
        self.slots
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(TransitionError::SignalNotFound { id })
    }

    pub fn get(&self, id: SignalId) -> Result<&str> {
        self.signal(id).map(|s| s.value.as_str())
    }

    pub fn set(&mut self, id: SignalId, value: impl Into<String>) -> Result<()> {
        let slot = self
            .slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(TransitionError::SignalNotFound { id })?;
        slot.value = value.into();
        Ok(())
    }

    /// Drop a signal. Its id stays dead; later access fails with `SignalNotFound`.
    pub fn remove(&mut self, id: SignalId) -> Result<TextSignal> {
        let removed = self
            .slots
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(TransitionError::SignalNotFound { id })?;
        self.names.remove(&removed.name);
        debug!("signal {:?} removed", removed.name);
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Live signals in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &TextSignal> {
        self.slots.iter().filter_map(Option::as_ref)
    }
}
