//! Per-frame output of a `Runner`.
//!
//! Outputs carry the signal values written during one `advance` call, keyed by
//! signal id and name, plus a separate list of step events. Hosts apply the
//! changes to whatever renders the text.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::ids::SignalId;

/// Latest value written to one signal during the frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub signal: SignalId,
    pub name: String,
    pub value: String,
}

/// Discrete events emitted while stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StepEvent {
    TweenStarted {
        signal: SignalId,
        from: String,
        to: String,
        duration: f64,
    },
    TweenFinished {
        signal: SignalId,
        value: String,
    },
    WaitFinished {
        seconds: f64,
    },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    pub changes: Vec<Change>,
    pub events: Vec<StepEvent>,
    /// Position of each signal in `changes`.
    #[serde(skip)]
    slots: HashMap<SignalId, usize>,
}

impl PartialEq for Outputs {
    fn eq(&self, other: &Self) -> bool {
        self.changes == other.changes && self.events == other.events
    }
}

impl Outputs {
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
        self.slots.clear();
    }

    /// Record a write; repeated writes to one signal keep the first slot and the last value.
    pub fn record(&mut self, signal: SignalId, name: &str, value: &str) {
        if self.slots.len() != self.changes.len() {
            self.reindex();
        }
        match self.slots.get(&signal) {
            Some(&slot) => {
                let change = &mut self.changes[slot];
                change.value.clear();
                change.value.push_str(value);
            }
            None => {
                self.slots.insert(signal, self.changes.len());
                self.changes.push(Change {
                    signal,
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    // `changes` is public; the index can fall behind it
    fn reindex(&mut self) {
        self.slots.clear();
        for (slot, change) in self.changes.iter().enumerate() {
            self.slots.entry(change.signal).or_insert(slot);
        }
    }

    pub fn push_event(&mut self, event: StepEvent) {
        self.events.push(event);
    }

    /// Value written to the named signal this frame, if any.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.changes
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins_in_first_slot() {
        let mut out = Outputs::default();
        out.record(SignalId(1), "b", "x");
        out.record(SignalId(0), "a", "y");
        out.record(SignalId(1), "b", "z");
        assert_eq!(out.changes.len(), 2);
        assert_eq!(out.changes[0].value, "z");
        assert_eq!(out.value_of("a"), Some("y"));

        out.clear();
        out.record(SignalId(0), "a", "w");
        assert_eq!(out.changes.len(), 1);
        assert_eq!(out.changes[0].signal, SignalId(0));
    }

    #[test]
    fn deserialized_outputs_still_merge_writes() {
        let mut out = Outputs::default();
        out.record(SignalId(3), "c", "one");
        out.record(SignalId(4), "d", "two");
        let json = serde_json::to_string(&out).unwrap();

        let mut back: Outputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
        back.record(SignalId(4), "d", "three");
        back.record(SignalId(5), "e", "four");
        assert_eq!(back.changes.len(), 3);
        assert_eq!(back.changes[1].value, "three");
        assert_eq!(back.value_of("e"), Some("four"));
    }

    #[test]
    fn hand_filled_changes_are_indexed() {
        let mut out = Outputs::default();
        out.changes.push(Change {
            signal: SignalId(7),
            name: "g".into(),
            value: "old".into(),
        });
        out.record(SignalId(7), "g", "new");
        assert_eq!(out.changes.len(), 1);
        assert_eq!(out.value_of("g"), Some("new"));
    }
}
