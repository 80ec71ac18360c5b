pub mod components;
mod debug;
pub mod error;
pub mod harness;
pub mod traits;

pub use components::table::strategy::Strategy;
pub use components::table::{
    DoubleHashingTable, LinearProbingTable, PrimaryQuadraticProbingTable, ProbeTable,
    QuadraticProbingTable, DEFAULT_CAPACITY,
};
pub use error::Error;
pub use traits::probing_table::ProbingTable;

pub type Result<T> = std::result::Result<T, Error>;
