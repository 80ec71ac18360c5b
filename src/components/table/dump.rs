use std::fmt::{self, Display};

use serde::Serialize;

/// One occupied slot of a table.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpRow<'a, K, V> {
    pub index: usize,
    pub key: &'a K,
    pub value: &'a V,
}

/// Snapshot of a table's occupied slots in ascending index order and its collision counter.
///
/// The [`Display`] impl renders the report format:
///
/// ```text
/// *** Linear probing Start ***
///
/// print table.size()=191
/// index=5 key=5 value=10
///
/// Linear probing 0 collisions
///
/// *** Linear probing End ***
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TableDump<'a, K, V> {
    pub name: &'static str,
    pub capacity: usize,
    pub rows: Vec<DumpRow<'a, K, V>>,
    pub collisions: usize,
}

impl<'a, K, V> TableDump<'a, K, V> {
    pub fn new<I>(name: &'static str, capacity: usize, rows: I, collisions: usize) -> Self
    where
        I: IntoIterator<Item = (usize, &'a K, &'a V)>,
    {
        let rows = rows
            .into_iter()
            .map(|(index, key, value)| DumpRow { index, key, value })
            .collect();

        Self {
            name,
            capacity,
            rows,
            collisions,
        }
    }
}

impl<'a, K: Display, V: Display> Display for TableDump<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** {} probing Start ***", self.name)?;
        writeln!(f)?;
        writeln!(f, "print table.size()={}", self.capacity)?;
        for row in &self.rows {
            writeln!(f, "index={} key={} value={}", row.index, row.key, row.value)?;
        }
        writeln!(f)?;
        writeln!(f, "{} probing {} collisions", self.name, self.collisions)?;
        writeln!(f)?;
        writeln!(f, "*** {} probing End ***", self.name)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render() {
        let keys = [5, 196];
        let values = [10, 392];
        let dump = TableDump::new(
            "Linear",
            191,
            [(5, &keys[0], &values[0]), (6, &keys[1], &values[1])],
            1,
        );

        let expect = "*** Linear probing Start ***\n\
                      \n\
                      print table.size()=191\n\
                      index=5 key=5 value=10\n\
                      index=6 key=196 value=392\n\
                      \n\
                      Linear probing 1 collisions\n\
                      \n\
                      *** Linear probing End ***\n\
                      \n";
        assert_eq!(dump.to_string(), expect);
    }

    #[test]
    fn test_serialize() {
        let keys = [7u32];
        let values = [14u32];
        let dump = TableDump::new("Linear", 11, [(7, &keys[0], &values[0])], 0);

        // Same layout as the owned form of the dump.
        let encoded = bincode::serialize(&dump).unwrap();
        let decoded: (String, usize, Vec<(usize, u32, u32)>, usize) =
            bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, ("Linear".to_string(), 11, vec![(7, 7, 14)], 0));
    }

    #[test]
    fn test_render_empty() {
        let dump: TableDump<u32, u32> = TableDump::new("Double Hashing", 3, [], 0);
        let text = dump.to_string();
        assert!(text.starts_with("*** Double Hashing probing Start ***\n\nprint table.size()=3\n\n"));
        assert!(text.contains("Double Hashing probing 0 collisions"));
    }
}
