//! # Identifier Generation
//!
//! New notes and folders get their ids from an [`IdGenerator`]. Two strategies exist:
//!
//! - [`MillisIdGenerator`]: decimal milliseconds since the Unix epoch. This is the
//!   format existing snapshots use, so it is the default. Two entities created in
//!   the same millisecond would collide, so the generator never goes backwards or
//!   repeats: it issues `max(now, last + 1)`.
//! - [`UuidIdGenerator`]: random v4 UUIDs, for callers that prefer opaque ids.
//!
//! Generators are told about every id loaded from a snapshot ([`IdGenerator::observe`])
//! so that a clock running behind old data cannot hand out an id already in use.

use crate::model::Id;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub trait IdGenerator {
    /// Returns an id distinct from every id issued or observed so far.
    fn next_id(&mut self) -> Id;

    /// Registers an id that already exists in the store.
    fn observe(&mut self, _existing: &Id) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Millis,
    Uuid,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Millis => Box::new(MillisIdGenerator::new()),
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
        }
    }
}

#[derive(Debug, Default)]
pub struct MillisIdGenerator {
    last: i64,
}

impl MillisIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self, now: i64) -> Id {
        let next = self.last.checked_add(1).map_or(now, |floor| now.max(floor));
        self.last = next;
        Id::new(next.to_string())
    }
}

impl IdGenerator for MillisIdGenerator {
    fn next_id(&mut self) -> Id {
        self.issue(Utc::now().timestamp_millis())
    }

    fn observe(&mut self, existing: &Id) {
        // Non-numeric ids (e.g. UUIDs from another strategy) cannot collide, and
        // neither can i64::MAX since `last + 1` never reaches it.
        match existing.as_str().parse::<i64>() {
            Ok(value) if value < i64::MAX => self.last = self.last.max(value),
            _ => {}
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> Id {
        Id::new(Uuid::new_v4().to_string())
    }
}
