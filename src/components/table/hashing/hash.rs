/// Modulus of the secondary hash. Fixed prime, independent of the table capacity.
pub const SECONDARY_MODULUS: u32 = 181;

/// Stable 32-bit hash of a key.
pub trait Hash {
    fn hash(&self) -> u32;
}

impl<T: Hash + ?Sized> Hash for &T {
    #[inline]
    fn hash(&self) -> u32 {
        (**self).hash()
    }
}

macro_rules! impl_identity {
    ($($e:ty),*) => {
        $(
            impl Hash for $e {
                #[inline]
                fn hash(&self) -> u32 {
                    *self as u32
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($e:ty),*) => {
        $(
            impl Hash for $e {
                #[inline]
                fn hash(&self) -> u32 {
                    // Sign extend so that -1i8 and -1i32 hash the same.
                    *self as i32 as u32
                }
            }
        )*
    };
}

macro_rules! impl_fold {
    ($($e:ty),*) => {
        $(
            impl Hash for $e {
                #[inline]
                fn hash(&self) -> u32 {
                    fold(*self as u64)
                }
            }
        )*
    };
}

impl_identity!(u8, u16, u32, char);
impl_signed!(i8, i16, i32);
impl_fold!(u64, i64, usize, isize);

impl Hash for bool {
    #[inline]
    fn hash(&self) -> u32 {
        *self as u32
    }
}

impl Hash for [u8] {
    #[inline]
    fn hash(&self) -> u32 {
        fold(fnv_hash(self))
    }
}

impl Hash for Vec<u8> {
    #[inline]
    fn hash(&self) -> u32 {
        self.as_slice().hash()
    }
}

impl Hash for str {
    #[inline]
    fn hash(&self) -> u32 {
        self.as_bytes().hash()
    }
}

impl Hash for String {
    #[inline]
    fn hash(&self) -> u32 {
        self.as_bytes().hash()
    }
}

/// Clears the sign bit. Masking instead of `abs` keeps `i32::MIN` in range.
#[inline]
pub fn non_negative(hash: u32) -> u32 {
    hash & 0x7fff_ffff
}

/// First candidate slot for a key hash in a table of `capacity` slots.
#[inline]
pub fn primary_index(hash: u32, capacity: usize) -> usize {
    non_negative(hash) as usize % capacity
}

/// Secondary value for a key hash, always in `[1, SECONDARY_MODULUS]`.
#[inline]
pub fn secondary_step(hash: u32) -> usize {
    (SECONDARY_MODULUS - non_negative(hash) % SECONDARY_MODULUS) as usize
}

#[inline]
pub fn primary_hash<K: Hash + ?Sized>(key: &K, capacity: usize) -> usize {
    primary_index(key.hash(), capacity)
}

#[inline]
pub fn secondary_hash<K: Hash + ?Sized>(key: &K) -> usize {
    secondary_step(key.hash())
}

/// Folds the upper half of a 64-bit value into the lower half.
#[inline]
fn fold(v: u64) -> u32 {
    (v ^ (v >> 32)) as u32
}

const INIT_V: u64 = 14695981039346656037;
const PRIME: u64 = 1099511628211;

#[inline]
pub fn fnv_hash(b: &[u8]) -> u64 {
    b.iter()
        .fold(INIT_V, |h, e| (h ^ (*e as u64)).wrapping_mul(PRIME))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_integer_identity() {
        assert_eq!(5i32.hash(), 5);
        assert_eq!(196u32.hash(), 196);
        assert_eq!((-1i8).hash(), (-1i32).hash());
        assert_eq!('a'.hash(), 97);
    }

    #[test]
    fn test_primary() {
        assert_eq!(primary_hash(&5, 191), 5);
        assert_eq!(primary_hash(&196, 191), 5);
        assert_eq!(primary_hash(&0, 191), 0);

        // Sign bit is masked, not negated.
        assert_eq!(primary_hash(&-1i32, 191), 0x7fff_ffff % 191);
        assert_eq!(primary_hash(&i32::MIN, 191), 0);

        for k in -1000i32..1000 {
            assert!(primary_hash(&k, 7) < 7);
        }
    }

    #[test]
    fn test_secondary() {
        assert_eq!(secondary_hash(&0), 181);
        assert_eq!(secondary_hash(&1), 180);
        assert_eq!(secondary_hash(&181), 181);
        assert_eq!(secondary_hash(&180), 1);

        for k in -5000i32..5000 {
            let s = secondary_hash(&k);
            assert!((1..=181).contains(&s));
        }
    }

    #[test]
    fn test_wide_and_bytes() {
        assert_eq!(7u64.hash(), 7);
        assert_eq!((1u64 << 32).hash(), 1);
        assert_eq!("hallo".hash(), "hallo".to_string().hash());
        assert_eq!("hallo".hash(), b"hallo".as_slice().hash());
        assert_ne!("hallo".hash(), "bye".hash());
        assert_eq!(fnv_hash(b""), INIT_V);
    }
}
