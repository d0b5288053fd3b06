use contracts::pipeline::{SeriesPayload, TabularPayload};
use serde_json::Value;

const INDEX_HEADER: &str = "Index";

/// Headers and rows ready for [`super::DataGrid`]
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    /// Always `false`: previews and summaries are shown in full
    pub paging: bool,
}

/// Display text of a label or cell; strings lose their quotes, null is blank
pub fn cell_label(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `["Index"] + columns` headers, each row prefixed with its index label
pub fn to_table_grid_spec(payload: &TabularPayload) -> GridSpec {
    if let Err(err) = payload.validate() {
        log::warn!("malformed frame payload: {}", err);
    }

    let headers = std::iter::once(INDEX_HEADER.to_string())
        .chain(payload.columns.iter().map(cell_label))
        .collect();

    let rows = payload
        .index
        .iter()
        .zip(&payload.data)
        .map(|(label, row)| {
            let mut cells = Vec::with_capacity(row.len() + 1);
            cells.push(label.clone());
            cells.extend(row.iter().cloned());
            cells
        })
        .collect();

    GridSpec {
        headers,
        rows,
        paging: false,
    }
}

/// Two-column `[index, value]` rows
pub fn to_series_grid_spec(payload: &SeriesPayload) -> GridSpec {
    if let Err(err) = payload.validate() {
        log::warn!("malformed series payload: {}", err);
    }

    let value_header = payload.name.as_ref().map(cell_label).unwrap_or_default();
    let rows = payload
        .index
        .iter()
        .zip(&payload.data)
        .map(|(label, value)| vec![label.clone(), value.clone()])
        .collect();

    GridSpec {
        headers: vec![INDEX_HEADER.to_string(), value_header],
        rows,
        paging: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frame(n: usize, m: usize) -> TabularPayload {
        TabularPayload {
            columns: (0..m).map(|c| json!(format!("c{}", c))).collect(),
            index: (0..n).map(|r| json!(format!("r{}", r))).collect(),
            data: (0..n)
                .map(|r| (0..m).map(|c| json!(r * 10 + c)).collect())
                .collect(),
        }
    }

    #[test]
    fn test_table_grid_shape() {
        for (n, m) in [(0, 0), (1, 3), (5, 2), (4, 0)] {
            let spec = to_table_grid_spec(&frame(n, m));
            assert_eq!(spec.headers.len(), m + 1);
            assert_eq!(spec.headers[0], "Index");
            assert_eq!(spec.rows.len(), n);
            for (i, row) in spec.rows.iter().enumerate() {
                assert_eq!(row.len(), m + 1);
                assert_eq!(row[0], json!(format!("r{}", i)));
            }
            assert!(!spec.paging);
        }
    }

    #[test]
    fn test_table_grid_keeps_cell_order() {
        let spec = to_table_grid_spec(&TabularPayload {
            columns: vec![json!("income"), json!("persons")],
            index: vec![json!(7)],
            data: vec![vec![json!(52000.5), json!(3)]],
        });
        assert_eq!(spec.headers, vec!["Index", "income", "persons"]);
        assert_eq!(spec.rows, vec![vec![json!(7), json!(52000.5), json!(3)]]);
    }

    #[test]
    fn test_series_grid_rows_are_pairs() {
        let spec = to_series_grid_spec(&SeriesPayload {
            name: Some(json!("age")),
            index: vec![json!("count"), json!("mean"), json!("max")],
            data: vec![json!(3.0), json!(41.2), json!(80.0)],
        });
        assert_eq!(spec.headers, vec!["Index", "age"]);
        assert_eq!(spec.rows.len(), 3);
        assert!(spec.rows.iter().all(|row| row.len() == 2));
        assert_eq!(spec.rows[1], vec![json!("mean"), json!(41.2)]);
    }

    #[test]
    fn test_series_without_name_has_blank_header() {
        let spec = to_series_grid_spec(&SeriesPayload {
            name: None,
            index: vec![json!(0)],
            data: vec![json!(null)],
        });
        assert_eq!(spec.headers, vec!["Index", ""]);
    }

    #[test]
    fn test_mismatched_lengths_do_not_panic() {
        let spec = to_table_grid_spec(&TabularPayload {
            columns: vec![json!("a")],
            index: vec![json!(0), json!(1), json!(2)],
            data: vec![vec![json!(1)]],
        });
        assert_eq!(spec.rows.len(), 1);
    }

    #[test]
    fn test_cell_label() {
        assert_eq!(cell_label(&json!("x")), "x");
        assert_eq!(cell_label(&json!(null)), "");
        assert_eq!(cell_label(&json!(1.5)), "1.5");
        assert_eq!(cell_label(&json!(true)), "true");
        assert_eq!(cell_label(&json!(["a", 1])), "[\"a\",1]");
    }
}
