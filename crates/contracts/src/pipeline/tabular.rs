use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// DataFrame in pandas "split" orientation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularPayload {
    /// Column labels, in order
    pub columns: Vec<Value>,
    /// Row labels, one per row of `data`
    pub index: Vec<Value>,
    /// Row-major values, each row as wide as `columns`
    pub data: Vec<Vec<Value>>,
}

/// Series in pandas "split" orientation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesPayload {
    /// Series name; null for unnamed series
    #[serde(default)]
    pub name: Option<Value>,
    /// Row labels, one per value
    pub index: Vec<Value>,
    /// Values, in index order
    pub data: Vec<Value>,
}

/// Column names of a single table, as served by `/tables/:table/columns`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumns {
    pub columns: Vec<String>,
}

/// Violation of the split-format shape invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("index has {index} labels but data has {rows} rows")]
    IndexLength { index: usize, rows: usize },
    #[error("row {row} has {len} values, expected {expected}")]
    RowWidth { row: usize, len: usize, expected: usize },
}

impl TabularPayload {
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Check `len(index) == len(data)` and that every row matches `columns`
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.index.len() != self.data.len() {
            return Err(ShapeError::IndexLength {
                index: self.index.len(),
                rows: self.data.len(),
            });
        }
        let expected = self.columns.len();
        match self.data.iter().position(|row| row.len() != expected) {
            Some(row) => Err(ShapeError::RowWidth {
                row,
                len: self.data[row].len(),
                expected,
            }),
            None => Ok(()),
        }
    }
}

impl SeriesPayload {
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.index.len() != self.data.len() {
            return Err(ShapeError::IndexLength {
                index: self.index.len(),
                rows: self.data.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_split_frame() {
        let frame: TabularPayload = serde_json::from_value(json!({
            "columns": ["a", "b"],
            "index": ["x", "y"],
            "data": [[1, "one"], [2, null]]
        }))
        .unwrap();
        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.data[1][1], Value::Null);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_index_mismatch() {
        let frame = TabularPayload {
            columns: vec![json!("a")],
            index: vec![json!(0)],
            data: vec![vec![json!(1)], vec![json!(2)]],
        };
        assert_eq!(
            frame.validate(),
            Err(ShapeError::IndexLength { index: 1, rows: 2 })
        );
    }

    #[test]
    fn test_validate_reports_ragged_row() {
        let frame = TabularPayload {
            columns: vec![json!("a"), json!("b")],
            index: vec![json!(0), json!(1)],
            data: vec![vec![json!(1), json!(2)], vec![json!(3)]],
        };
        assert_eq!(
            frame.validate(),
            Err(ShapeError::RowWidth { row: 1, len: 1, expected: 2 })
        );
    }

    #[test]
    fn test_decode_unnamed_series() {
        let series: SeriesPayload = serde_json::from_value(json!({
            "name": null,
            "index": ["count", "mean"],
            "data": [5.0, 2.5]
        }))
        .unwrap();
        assert_eq!(series.name, None);
        assert!(series.validate().is_ok());
    }
}
