//! Signal handles.
//!
//! A `SignalId` is the slot index of its signal in the owning store. Handles
//! are handed out in increasing order and a retired handle is never issued
//! again, so a stale id can only miss, never alias a newer signal.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitionError};

/// Handle of a text signal inside a `SignalStore`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SignalId(pub u32);

impl SignalId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Hands out `SignalId`s in slot order until the `u32` space runs out.
#[derive(Default, Debug)]
pub(crate) struct IdAllocator {
    next_signal: u32,
}

impl IdAllocator {
    pub(crate) fn alloc_signal(&mut self) -> Result<SignalId> {
        let id = self.next_signal;
        self.next_signal = id
            .checked_add(1)
            .ok_or(TransitionError::SignalIdsExhausted)?;
        Ok(SignalId(id))
    }
}
