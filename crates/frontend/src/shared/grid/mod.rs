//! Grid rendering for split-format frames and series.
//!
//! `spec` turns backend payloads into a [`GridSpec`]; `data_grid` draws one.

pub mod data_grid;
pub mod spec;

pub use data_grid::DataGrid;
pub use spec::{cell_label, to_series_grid_spec, to_table_grid_spec, GridSpec};
