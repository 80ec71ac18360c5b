/// Set of slot indices already inspected by one probe run. Only allocates once the first index gets recorded.
pub(super) struct Visited {
    bits: Vec<u64>,
    capacity: usize,
}

impl Visited {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: Vec::new(),
            capacity,
        }
    }

    /// Records `index`. Returns `false` if it was recorded before.
    pub fn insert(&mut self, index: usize) -> bool {
        debug_assert!(index < self.capacity);
        if self.bits.is_empty() {
            self.bits = vec![0; self.capacity.div_ceil(64)];
        }

        let (word, bit) = (index / 64, index % 64);
        let mask = 1u64 << bit;
        let fresh = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        fresh
    }
}
