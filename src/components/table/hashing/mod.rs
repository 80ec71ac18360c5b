pub mod hash;
pub mod hashfn;

pub use hash::{primary_hash, secondary_hash, Hash, SECONDARY_MODULUS};
pub use hashfn::{DoubleHashing, HashFn, LinearProbing, PrimaryQuadraticProbing, QuadraticProbing};
