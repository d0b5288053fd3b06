//! Table entity: info, preview, definition, summary statistics and columns.

mod page;

pub use page::TablePage;

use crate::domain::common::EntityKind;
use crate::shared::api::Endpoint;
use crate::shared::api_utils::encode_segment;
use crate::shared::components::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub table: String,
}

impl TableRef {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableTab {
    Info,
    Preview,
    Definition,
    Describe,
    Columns,
}

impl TabId for TableTab {
    const ALL: &'static [Self] = &[
        TableTab::Info,
        TableTab::Preview,
        TableTab::Definition,
        TableTab::Describe,
        TableTab::Columns,
    ];

    fn label(self) -> &'static str {
        match self {
            TableTab::Info => "Info",
            TableTab::Preview => "Preview",
            TableTab::Definition => "Definition",
            TableTab::Describe => "Describe",
            TableTab::Columns => "Columns",
        }
    }
}

impl EntityKind for TableRef {
    type Tab = TableTab;

    const KIND: &'static str = "Table";

    fn title(&self) -> String {
        self.table.clone()
    }

    fn fragment(&self) -> String {
        format!("tables/{}", encode_segment(&self.table))
    }

    fn endpoint(&self, tab: TableTab) -> Endpoint {
        let table = self.table.clone();
        match tab {
            TableTab::Info => Endpoint::TableInfo { table },
            TableTab::Preview => Endpoint::TablePreview { table },
            TableTab::Definition => Endpoint::TableDefinition { table },
            TableTab::Describe => Endpoint::TableDescribe { table },
            TableTab::Columns => Endpoint::TableColumns { table },
        }
    }
}
