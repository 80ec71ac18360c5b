use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::components::table::hashing::{
    DoubleHashing, Hash, HashFn, LinearProbing, PrimaryQuadraticProbing, QuadraticProbing,
};
use crate::components::table::ProbeTable;
use crate::traits::probing_table::ProbingTable;
use crate::{Error, Result};

/// Probing strategy selectable at runtime.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Linear,
    /// Quadratic probing starting at the secondary hash.
    Quadratic,
    /// Quadratic probing starting at the primary hash.
    PrimaryQuadratic,
    DoubleHashing,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Linear,
        Strategy::Quadratic,
        Strategy::PrimaryQuadratic,
        Strategy::DoubleHashing,
    ];

    /// Display name, as used in table dumps.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Linear => LinearProbing::NAME,
            Strategy::Quadratic => QuadraticProbing::NAME,
            Strategy::PrimaryQuadratic => PrimaryQuadraticProbing::NAME,
            Strategy::DoubleHashing => DoubleHashing::NAME,
        }
    }

    /// Short lowercase identifier, usable in file names.
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Linear => "linear",
            Strategy::Quadratic => "quadratic",
            Strategy::PrimaryQuadratic => "quadratic_primary",
            Strategy::DoubleHashing => "double",
        }
    }

    /// Creates an empty table with `capacity` slots probing with this strategy.
    pub fn build<K, V>(self, capacity: usize) -> Result<Box<dyn ProbingTable<K, V>>>
    where
        K: Hash + Eq + 'static,
        V: 'static,
    {
        let table: Box<dyn ProbingTable<K, V>> = match self {
            Strategy::Linear => Box::new(ProbeTable::<K, V, LinearProbing>::with_capacity(capacity)?),
            Strategy::Quadratic => {
                Box::new(ProbeTable::<K, V, QuadraticProbing>::with_capacity(capacity)?)
            }
            Strategy::PrimaryQuadratic => {
                Box::new(ProbeTable::<K, V, PrimaryQuadraticProbing>::with_capacity(capacity)?)
            }
            Strategy::DoubleHashing => {
                Box::new(ProbeTable::<K, V, DoubleHashing>::with_capacity(capacity)?)
            }
        };
        Ok(table)
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Strategy::Linear),
            "quadratic" => Ok(Strategy::Quadratic),
            "quadratic_primary" | "quadratic-primary" | "primary_quadratic" | "primary-quadratic" => {
                Ok(Strategy::PrimaryQuadratic)
            }
            "double" | "double_hashing" | "double-hashing" => Ok(Strategy::DoubleHashing),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        for s in Strategy::ALL {
            assert_eq!(s.tag().parse::<Strategy>(), Ok(s));
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("Double-Hashing".parse::<Strategy>(), Ok(Strategy::DoubleHashing));
        assert_eq!(
            "cuckoo".parse::<Strategy>(),
            Err(Error::UnknownStrategy("cuckoo".to_string()))
        );
    }

    #[test]
    fn test_build() {
        let mut tables: Vec<Box<dyn ProbingTable<i32, i32>>> = Strategy::ALL
            .iter()
            .map(|s| s.build(191).unwrap())
            .collect();

        for (table, strategy) in tables.iter_mut().zip(Strategy::ALL) {
            assert_eq!(table.name(), strategy.name());
            assert_eq!(table.capacity(), 191);
            for k in [5, 196, 387, 0, 181] {
                table.put(k, k * 2).unwrap();
            }
            for k in [5, 196, 387, 0, 181] {
                assert_eq!(table.get(&k), Some(&(k * 2)));
            }
            assert_eq!(table.len(), 5);
            assert!(table.collisions() > 0);
            assert_eq!(table.dump().rows.len(), 5);
        }

        assert!(Strategy::Linear.build::<i32, i32>(0).is_err());
    }

    #[test]
    fn test_serde() {
        let encoded = bincode::serialize(&Strategy::ALL).unwrap();
        let decoded: [Strategy; 4] = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, Strategy::ALL);
    }
}
