use super::TableRef;
use crate::domain::common::EntityPage;
use crate::shared::api::ApiClient;
use crate::shared::api_utils::table_csv_path;
use crate::shared::config::BrowserConfig;
use leptos::prelude::*;

#[component]
pub fn TablePage(table: TableRef) -> impl IntoView {
    let csv_href = ApiClient::new(&BrowserConfig::current()).url(&table_csv_path(&table.table));

    view! {
        <EntityPage entity=table>
            <a class="button button--secondary" href=csv_href download="">"Download CSV"</a>
        </EntityPage>
    }
}
