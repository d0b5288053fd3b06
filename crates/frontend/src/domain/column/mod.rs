//! Column entity: preview, definition and summary statistics of one column.

mod page;

pub use page::ColumnPage;

use crate::domain::common::EntityKind;
use crate::shared::api::Endpoint;
use crate::shared::api_utils::encode_segment;
use crate::shared::components::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnTab {
    Preview,
    Definition,
    Describe,
}

impl TabId for ColumnTab {
    const ALL: &'static [Self] = &[ColumnTab::Preview, ColumnTab::Definition, ColumnTab::Describe];

    fn label(self) -> &'static str {
        match self {
            ColumnTab::Preview => "Preview",
            ColumnTab::Definition => "Definition",
            ColumnTab::Describe => "Describe",
        }
    }
}

impl EntityKind for ColumnRef {
    type Tab = ColumnTab;

    const KIND: &'static str = "Column";

    fn title(&self) -> String {
        format!("{}.{}", self.table, self.column)
    }

    fn fragment(&self) -> String {
        format!(
            "tables/{}/columns/{}",
            encode_segment(&self.table),
            encode_segment(&self.column)
        )
    }

    fn endpoint(&self, tab: ColumnTab) -> Endpoint {
        let (table, column) = (self.table.clone(), self.column.clone());
        match tab {
            ColumnTab::Preview => Endpoint::ColumnPreview { table, column },
            ColumnTab::Definition => Endpoint::ColumnDefinition { table, column },
            ColumnTab::Describe => Endpoint::ColumnDescribe { table, column },
        }
    }
}
