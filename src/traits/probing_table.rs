use crate::components::table::dump::TableDump;
use crate::components::table::insertion::Insertion;
use crate::Result;

/// Common behavior of all fixed size probing tables, independent of the probing strategy in use.
pub trait ProbingTable<K, V> {
    /// Name of the probing strategy.
    fn name(&self) -> &'static str;

    /// The amount of slots.
    fn capacity(&self) -> usize;

    /// The amount of occupied slots.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the value stored for `key`. `None` means the key isn't present.
    fn get(&self, key: &K) -> Option<&V>;

    /// Inserts or overwrites the value of `key`.
    fn put(&mut self, key: K, value: V) -> Result<Insertion>;

    /// Cumulative amount of collisions of all `get` and `put` calls.
    fn collisions(&self) -> usize;

    /// All occupied slots in index order together with the collision count.
    fn dump(&self) -> TableDump<'_, K, V>;
}
