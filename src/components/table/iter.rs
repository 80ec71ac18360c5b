use std::iter::Enumerate;
use std::slice::Iter;

use crate::components::table::record::Record;

/// Iterator over the occupied slots of a table in ascending index order.
pub struct TableIter<'a, K, V> {
    slots: Enumerate<Iter<'a, Option<Record<K, V>>>>,
}

impl<'a, K, V> TableIter<'a, K, V> {
    #[inline]
    pub(super) fn new(slots: &'a [Option<Record<K, V>>]) -> Self {
        Self {
            slots: slots.iter().enumerate(),
        }
    }
}

impl<'a, K, V> Iterator for TableIter<'a, K, V> {
    /// `(slot index, key, value)`
    type Item = (usize, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|(index, slot)| {
            slot.as_ref()
                .map(|record| (index, record.key(), record.value()))
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}
