//! Rendering of tab payloads

use super::machine::TabContent;
use crate::domain::column::ColumnRef;
use crate::domain::common::EntityKind;
use crate::shared::api::TabPayload;
use crate::shared::components::{LinkItem, LinkList};
use crate::shared::definition::{render_definition, DefinitionPanel};
use crate::shared::grid::{to_series_grid_spec, to_table_grid_spec, DataGrid};
use contracts::pipeline::{BroadcastDefinition, InjectableRepr};
use leptos::prelude::*;
use thaw::*;

/// Content of the active tab; `None` means nothing was requested yet
#[component]
pub fn TabContentView(content: Option<TabContent>) -> impl IntoView {
    match content {
        None => ().into_any(),
        Some(TabContent::Pending) => view! {
            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-xl);">
                <Spinner />
                <span>"Loading..."</span>
            </Flex>
        }
        .into_any(),
        Some(TabContent::Failed(message)) => view! {
            <div class="error-state">
                <p class="error-title">"Failed to load"</p>
                <p class="error-message">{message}</p>
            </div>
        }
        .into_any(),
        Some(TabContent::Ready(payload)) => render_payload(payload),
    }
}

fn render_payload(payload: TabPayload) -> AnyView {
    match payload {
        TabPayload::Text(text) => view! {
            <div class="table-info">
                <pre>{text}</pre>
            </div>
        }
        .into_any(),
        TabPayload::Table(frame) => view! { <DataGrid spec=to_table_grid_spec(&frame) /> }.into_any(),
        TabPayload::Series(series) => {
            view! { <DataGrid spec=to_series_grid_spec(&series) /> }.into_any()
        }
        TabPayload::Definition(definition) => {
            log::debug!("rendering {} definition", definition.kind());
            view! { <DefinitionPanel definition=render_definition(&definition) /> }.into_any()
        }
        TabPayload::Columns { table, columns } => {
            let items = column_links(&table, columns);
            view! { <LinkList items=items /> }.into_any()
        }
        TabPayload::Repr(repr) => view! { <ReprView repr=repr /> }.into_any(),
        TabPayload::Broadcast(definition) => {
            view! { <BroadcastView definition=definition /> }.into_any()
        }
    }
}

fn column_links(table: &str, columns: Vec<String>) -> Vec<LinkItem> {
    columns
        .into_iter()
        .map(|column| {
            let href = ColumnRef::new(table, &column).href();
            LinkItem::new(column, href)
        })
        .collect()
}

#[component]
fn ReprView(repr: InjectableRepr) -> impl IntoView {
    view! {
        <div class="inj-repr">
            <div>
                <p>"Type"</p>
                <p><code>{repr.type_name}</code></p>
            </div>
            <div>
                <p>"Repr"</p>
                <p><code>{repr.repr}</code></p>
            </div>
        </div>
    }
}

#[component]
fn BroadcastView(definition: BroadcastDefinition) -> impl IntoView {
    let lines = definition.keyword_lines();
    view! {
        <div class="broadcast-definition">
            <div>
                <p><strong>"Cast"</strong></p>
                <p>{definition.cast}</p>
            </div>
            <div>
                <p><strong>"Onto"</strong></p>
                <p>{definition.onto}</p>
            </div>
            <div>
                <p><strong>"With"</strong></p>
                <ul>
                    {lines
                        .into_iter()
                        .map(|line| view! { <li><code>{line}</code></li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
