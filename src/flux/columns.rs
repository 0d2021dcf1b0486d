//! Column-name to index mapping for flux CSV dumps.
//!
//! A flux file describes its own layout: the line after the `data:` marker
//! names every column. The mapping is discovered once per file and shared
//! by all row projections.

use std::collections::HashMap;

use crate::error::{Result, SwpcError};

/// Column positions discovered from a file's own header line
#[derive(Debug, Clone)]
pub struct ColumnMap {
    name_to_index: HashMap<String, usize>,
}

impl ColumnMap {
    /// Record the 0-based position of each comma-separated column name
    pub fn from_header_line(line: &str) -> Self {
        let mut name_to_index = HashMap::new();
        for (index, name) in line.split(',').enumerate() {
            name_to_index.insert(name.trim().to_string(), index);
        }
        Self { name_to_index }
    }

    /// Look up a column's index, failing when the name was never declared.
    ///
    /// An absent name is a hard error: silently projecting the wrong field
    /// would be worse than refusing the request.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.name_to_index
            .get(name)
            .copied()
            .ok_or_else(|| SwpcError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Check whether a column exists in the mapping
    pub fn has_column(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Number of columns the file declared
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_file_order() {
        let map = ColumnMap::from_header_line("time_tag,ZPGT1E,ZPGT5E,ZPGT10E");

        assert_eq!(map.len(), 4);
        assert_eq!(map.index_of("time_tag").unwrap(), 0);
        assert_eq!(map.index_of("ZPGT5E").unwrap(), 2);
        assert_eq!(map.index_of("ZPGT10E").unwrap(), 3);
    }

    #[test]
    fn test_unknown_column_is_error() {
        let map = ColumnMap::from_header_line("a,b,c");

        assert!(map.has_column("b"));
        assert!(!map.has_column("missing"));

        match map.index_of("missing").unwrap_err() {
            SwpcError::UnknownColumn { name } => assert_eq!(name, "missing"),
            other => panic!("expected UnknownColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_names_are_trimmed() {
        let map = ColumnMap::from_header_line(" a , b ,c");
        assert_eq!(map.index_of("b").unwrap(), 1);
    }
}
