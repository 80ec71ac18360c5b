use serde::{Deserialize, Serialize};

/// Outcome of a successful `put`.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Insertion {
    collisions: usize,
    inserted: bool,
    position: usize,
}

impl Insertion {
    #[inline]
    pub fn new(collisions: usize, inserted: bool, position: usize) -> Self {
        Self {
            collisions,
            inserted,
            position,
        }
    }

    #[inline]
    pub fn had_collision(&self) -> bool {
        self.collisions > 0
    }

    /// True if a new record was created. False if the value of an existing key got overwritten.
    #[inline]
    pub fn inserted(&self) -> bool {
        self.inserted
    }

    /// Amount of occupied slots with a different key visited before the key's slot was found.
    #[inline]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Slot index the record lives in.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}
