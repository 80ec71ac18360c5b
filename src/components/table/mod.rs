pub mod dump;
pub mod hashing;
pub mod insertion;
pub mod iter;
pub mod record;
pub mod strategy;
mod visited;

use crate::components::table::dump::TableDump;
use crate::components::table::hashing::{
    DoubleHashing, Hash, HashFn, LinearProbing, PrimaryQuadraticProbing, QuadraticProbing,
};
use crate::components::table::insertion::Insertion;
use crate::components::table::iter::TableIter;
use crate::components::table::record::Record;
use crate::components::table::visited::Visited;
use crate::debug::debug;
use crate::traits::probing_table::ProbingTable;
use crate::{Error, Result};
use std::cell::Cell;
use std::marker::PhantomData;

/// Default table capacity. Prime, to reduce clustering.
pub const DEFAULT_CAPACITY: usize = 191;

pub type LinearProbingTable<K, V> = ProbeTable<K, V, LinearProbing>;
pub type QuadraticProbingTable<K, V> = ProbeTable<K, V, QuadraticProbing>;
pub type PrimaryQuadraticProbingTable<K, V> = ProbeTable<K, V, PrimaryQuadraticProbing>;
pub type DoubleHashingTable<K, V> = ProbeTable<K, V, DoubleHashing>;

/// Result of walking a key's probe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Empty slot where the key can be placed.
    Vacant(usize),
    /// Slot holding the key.
    Occupied(usize),
    /// The sequence started to revisit slots without hitting an empty or matching one.
    Exhausted,
}

/// Open addressing table with a fixed amount of slots. Collisions are resolved by walking the probe sequence of `H`.
///
/// The table never grows. Once all slots reachable by a key are taken by other keys, inserting that key fails with
/// [`Error::CapacityExceeded`].
pub struct ProbeTable<K, V, H = LinearProbing> {
    slots: Vec<Option<Record<K, V>>>,

    /// The amount of occupied slots.
    len: usize,

    /// Occupied slots with a non matching key visited by all `get` and `put` calls so far.
    collisions: Cell<usize>,

    p: PhantomData<H>,
}

impl<K, V, H> ProbeTable<K, V, H> {
    /// Creates a table with `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots,
            len: 0,
            collisions: Cell::new(0),
            p: PhantomData,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.capacity() as f32
    }

    /// Cumulative collision count. Never reset; snapshot it before and after a batch to get per batch numbers.
    #[inline]
    pub fn collisions(&self) -> usize {
        self.collisions.get()
    }

    /// Iterates over all occupied slots in ascending index order.
    #[inline]
    pub fn iter(&self) -> TableIter<'_, K, V> {
        TableIter::new(&self.slots)
    }

    /// Returns the record stored at slot `index`.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<&Record<K, V>> {
        self.slots.get(index)?.as_ref()
    }

    #[inline]
    fn add_collision(&self) {
        self.collisions.set(self.collisions.get() + 1);
    }
}

impl<K, V, H> ProbeTable<K, V, H>
where
    H: HashFn,
{
    #[inline]
    pub fn name(&self) -> &'static str {
        H::NAME
    }

    /// Renders all occupied slots in index order, followed by the collision count.
    pub fn dump(&self) -> TableDump<'_, K, V> {
        TableDump::new(H::NAME, self.capacity(), self.iter(), self.collisions())
    }
}

impl<K, V, H> ProbeTable<K, V, H>
where
    H: HashFn,
    K: Hash + Eq,
{
    /// Stores `value` for `key`. An existing value of the same key gets overwritten in place.
    ///
    /// Fails with [`Error::CapacityExceeded`] and leaves all slots untouched if the key isn't present and every slot
    /// on its probe sequence is held by another key. Collisions counted on the way stay counted.
    pub fn put(&mut self, key: K, value: V) -> Result<Insertion> {
        let (slot, collisions) = self.lookup(&key);

        match slot {
            Slot::Occupied(pos) => {
                if let Some(record) = self.slots[pos].as_mut() {
                    record.set_value(value);
                }
                Ok(Insertion::new(collisions, false, pos))
            }
            Slot::Vacant(pos) => {
                self.slots[pos] = Some(Record::new(key, value));
                self.len += 1;
                Ok(Insertion::new(collisions, true, pos))
            }
            Slot::Exhausted => {
                debug!(
                    "{} probing: no free slot after {collisions} collisions ({}/{} used)",
                    H::NAME,
                    self.len,
                    self.capacity()
                );
                Err(Error::CapacityExceeded)
            }
        }
    }

    /// Returns the value stored for `key`, or `None` if the key isn't in the table.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| i.1)
    }

    /// Returns the slot index and value of `key`.
    pub fn find(&self, key: &K) -> Option<(usize, &V)> {
        match self.lookup(key).0 {
            Slot::Occupied(pos) => self.slots[pos].as_ref().map(|r| (pos, r.value())),
            Slot::Vacant(_) | Slot::Exhausted => None,
        }
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Puts all pairs in order, stopping at the first error. Returns the amount of newly created records.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut inserted = 0;
        for (k, v) in iter {
            if self.put(k, v)?.inserted() {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Walks the probe sequence of `key` until it hits an empty slot or the key itself. Every occupied slot holding a
    /// different key counts as one collision. Returns the resolved slot and the collisions of this walk.
    fn lookup(&self, key: &K) -> (Slot, usize) {
        let hash = key.hash();
        let capacity = self.capacity();

        let mut tried = Visited::new(capacity);
        let mut collisions = 0;
        let mut attempt = 0;

        loop {
            let pos = H::f(hash, attempt, capacity);

            match &self.slots[pos] {
                None => return (Slot::Vacant(pos), collisions),
                Some(record) if record.key() == key => return (Slot::Occupied(pos), collisions),
                Some(_) => {
                    // Give up once the sequence comes back to a slot it already tried.
                    if !tried.insert(pos) {
                        return (Slot::Exhausted, collisions);
                    }
                    collisions += 1;
                    self.add_collision();
                    attempt += 1;
                }
            }
        }
    }
}

impl<K, V, H> ProbingTable<K, V> for ProbeTable<K, V, H>
where
    H: HashFn,
    K: Hash + Eq,
{
    #[inline]
    fn name(&self) -> &'static str {
        H::NAME
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        ProbeTable::<K, V, H>::get(self, key)
    }

    #[inline]
    fn put(&mut self, key: K, value: V) -> Result<Insertion> {
        ProbeTable::<K, V, H>::put(self, key, value)
    }

    #[inline]
    fn collisions(&self) -> usize {
        self.collisions.get()
    }

    #[inline]
    fn dump(&self) -> TableDump<'_, K, V> {
        ProbeTable::<K, V, H>::dump(self)
    }
}

impl<K, V> Default for ProbeTable<K, V> {
    fn default() -> Self {
        let mut slots = Vec::with_capacity(DEFAULT_CAPACITY);
        slots.resize_with(DEFAULT_CAPACITY, || None);
        Self {
            slots,
            len: 0,
            collisions: Cell::new(0),
            p: PhantomData,
        }
    }
}
