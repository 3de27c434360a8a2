// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Flattened timeline records.

use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// One flattened export entry: dotted-path column name to cell value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    values: HashMap<String, Value>,
}

impl RawRecord {
    pub fn new(values: HashMap<String, Value>) -> Self {
        Self { values }
    }

    /// Cell value; absent columns read as `None`.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column).filter(|v| !v.is_null())
    }

    /// True when the cell is absent, null, or the empty string.
    pub fn is_empty_at(&self, column: &str) -> bool {
        match self.get(column) {
            None => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        }
    }

    pub(crate) fn into_values(self) -> HashMap<String, Value> {
        self.values
    }
}

/// Row-oriented table of flattened records with an ordered column set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<RawRecord>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<RawRecord>) -> Self {
        Self { columns, rows }
    }

    /// Build a table from flattened rows, keeping columns in first-seen order.
    pub fn from_flattened(rows: Vec<Vec<(String, Value)>>) -> Self {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        let records = rows
            .into_iter()
            .map(|row| {
                for (column, _) in &row {
                    if seen.insert(column.clone()) {
                        columns.push(column.clone());
                    }
                }
                RawRecord::new(row.into_iter().collect())
            })
            .collect();

        Self {
            columns,
            rows: records,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[RawRecord] {
        &self.rows
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_in_first_seen_order() {
        let table = RawTable::from_flattened(vec![
            vec![("b".to_string(), json!(1)), ("a".to_string(), json!(2))],
            vec![("c".to_string(), json!(3)), ("a".to_string(), json!(4))],
        ]);

        assert_eq!(table.columns(), ["b", "a", "c"]);
        assert_eq!(table.len(), 2);
        assert!(table.rows()[0].get("c").is_none());
        assert_eq!(table.rows()[1].get("c"), Some(&json!(3)));
    }

    #[test]
    fn test_empty_cells() {
        let record = RawRecord::new(HashMap::from([
            ("null".to_string(), Value::Null),
            ("blank".to_string(), json!("")),
            ("zero".to_string(), json!(0)),
        ]));

        assert!(record.is_empty_at("null"));
        assert!(record.is_empty_at("blank"));
        assert!(record.is_empty_at("missing"));
        assert!(!record.is_empty_at("zero"));
    }
}
