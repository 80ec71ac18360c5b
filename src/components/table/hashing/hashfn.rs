use crate::components::table::hashing::hash::{primary_index, secondary_step};

/// A probe sequence. Maps the `attempt`-th probe of a key hash to a slot in `[0, capacity)`.
pub trait HashFn {
    /// Display name used in table dumps.
    const NAME: &'static str;

    fn f(hash: u32, attempt: usize, capacity: usize) -> usize;
}

/// `(a * b) % m` without overflowing for any `usize` input.
#[inline]
fn mul_mod(a: usize, b: usize, m: usize) -> usize {
    ((a as u128 * b as u128) % m as u128) as usize
}

pub struct LinearProbing;

impl HashFn for LinearProbing {
    const NAME: &'static str = "Linear";

    #[inline]
    fn f(hash: u32, attempt: usize, capacity: usize) -> usize {
        (primary_index(hash, capacity) + attempt % capacity) % capacity
    }
}

/// Quadratic probing starting at the secondary hash of the key instead of the primary one.
pub struct QuadraticProbing;

impl HashFn for QuadraticProbing {
    const NAME: &'static str = "Quadratic";

    #[inline]
    fn f(hash: u32, attempt: usize, capacity: usize) -> usize {
        let start = secondary_step(hash) % capacity;
        let i = attempt % capacity;
        (start + mul_mod(i, i, capacity)) % capacity
    }
}

/// Textbook quadratic probing: starts at the primary hash.
pub struct PrimaryQuadraticProbing;

impl HashFn for PrimaryQuadraticProbing {
    const NAME: &'static str = "Quadratic (primary start)";

    #[inline]
    fn f(hash: u32, attempt: usize, capacity: usize) -> usize {
        let i = attempt % capacity;
        (primary_index(hash, capacity) + mul_mod(i, i, capacity)) % capacity
    }
}

/// Starts at the primary hash and steps by the secondary hash.
pub struct DoubleHashing;

impl HashFn for DoubleHashing {
    const NAME: &'static str = "Double Hashing";

    #[inline]
    fn f(hash: u32, attempt: usize, capacity: usize) -> usize {
        let step = secondary_step(hash) % capacity;
        (primary_index(hash, capacity) + mul_mod(attempt % capacity, step, capacity)) % capacity
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sequence<H: HashFn>(hash: u32, capacity: usize, len: usize) -> Vec<usize> {
        (0..len).map(|i| H::f(hash, i, capacity)).collect()
    }

    #[test]
    fn test_linear() {
        assert_eq!(sequence::<LinearProbing>(5, 191, 3), vec![5, 6, 7]);
        assert_eq!(sequence::<LinearProbing>(189, 191, 4), vec![189, 190, 0, 1]);
    }

    #[test]
    fn test_quadratic() {
        // secondary(0) = 181
        assert_eq!(sequence::<QuadraticProbing>(0, 191, 4), vec![181, 182, 185, 190]);
        assert_eq!(QuadraticProbing::f(0, 4, 191), (181 + 16) % 191);

        // Small tables keep the start inside the index space.
        for k in 0..1000 {
            for a in 0..20 {
                assert!(QuadraticProbing::f(k, a, 7) < 7);
            }
        }
    }

    #[test]
    fn test_primary_quadratic() {
        assert_eq!(sequence::<PrimaryQuadraticProbing>(5, 191, 4), vec![5, 6, 9, 14]);
    }

    #[test]
    fn test_double_hashing() {
        // primary(5) = 5, secondary(5) = 176
        assert_eq!(
            sequence::<DoubleHashing>(5, 191, 3),
            vec![5, (5 + 176) % 191, (5 + 2 * 176) % 191]
        );
    }

    #[test]
    fn test_large_attempts() {
        let cap = (1usize << 40) + 15;
        let attempt = (1usize << 40) - 3;
        assert!(QuadraticProbing::f(u32::MAX, attempt, cap) < cap);
        assert!(DoubleHashing::f(u32::MAX, attempt, cap) < cap);
        assert!(LinearProbing::f(u32::MAX, attempt, cap) < cap);
    }
}
