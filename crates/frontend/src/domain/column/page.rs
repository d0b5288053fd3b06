use super::ColumnRef;
use crate::domain::common::{EntityKind, EntityPage};
use crate::domain::table::TableRef;
use crate::shared::api::ApiClient;
use crate::shared::api_utils::column_csv_path;
use crate::shared::config::BrowserConfig;
use leptos::prelude::*;

#[component]
pub fn ColumnPage(column: ColumnRef) -> impl IntoView {
    let csv_href = ApiClient::new(&BrowserConfig::current())
        .url(&column_csv_path(&column.table, &column.column));
    let table_href = TableRef::new(column.table.clone()).href();

    view! {
        <EntityPage entity=column>
            <a class="button button--ghost" href=table_href>"Back to table"</a>
            <a class="button button--secondary" href=csv_href download="">"Download CSV"</a>
        </EntityPage>
    }
}
