use super::matcher::Router;
use crate::domain::broadcast::{BroadcastPage, BroadcastRef};
use crate::domain::column::{ColumnPage, ColumnRef};
use crate::domain::common::EntityKind;
use crate::domain::injectable::{InjectablePage, InjectableRef};
use crate::domain::schema::SchemaPage;
use crate::domain::step::{StepPage, StepRef};
use crate::domain::table::{TablePage, TableRef};
use leptos::prelude::*;

/// Top-level view mounted into the content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Schema,
    Table(TableRef),
    Column(ColumnRef),
    Step(StepRef),
    Injectable(InjectableRef),
    Broadcast(BroadcastRef),
}

/// Route table of the browser, in matching order
pub fn app_router() -> Router<Page> {
    let mut router = Router::new();
    router
        .register("", |_| Page::Schema)
        .register("tables/:table", |p| Page::Table(TableRef::new(p.value("table"))))
        .register("tables/:table/columns/:column", |p| {
            Page::Column(ColumnRef::new(p.value("table"), p.value("column")))
        })
        .register("steps/:step", |p| {
            Page::Step(StepRef {
                step: p.value("step"),
            })
        })
        .register("injectables/:name", |p| {
            Page::Injectable(InjectableRef {
                name: p.value("name"),
            })
        })
        .register("broadcasts/:cast/:onto", |p| {
            Page::Broadcast(BroadcastRef {
                cast: p.value("cast"),
                onto: p.value("onto"),
            })
        });
    router
}

impl Page {
    pub fn fragment(&self) -> String {
        match self {
            Page::Schema => String::new(),
            Page::Table(r) => r.fragment(),
            Page::Column(r) => r.fragment(),
            Page::Step(r) => r.fragment(),
            Page::Injectable(r) => r.fragment(),
            Page::Broadcast(r) => r.fragment(),
        }
    }

    /// `(label, href)` trail from the schema root down to this page
    pub fn breadcrumbs(&self) -> Vec<(String, String)> {
        let mut trail = vec![("Schema".to_string(), "#".to_string())];
        match self {
            Page::Schema => {}
            Page::Table(r) => trail.push((r.title(), r.href())),
            Page::Column(r) => {
                let table = TableRef::new(r.table.clone());
                trail.push((table.title(), table.href()));
                trail.push((r.column.clone(), r.href()));
            }
            Page::Step(r) => trail.push((r.title(), r.href())),
            Page::Injectable(r) => trail.push((r.title(), r.href())),
            Page::Broadcast(r) => trail.push((r.title(), r.href())),
        }
        trail
    }

    pub fn render(self) -> AnyView {
        match self {
            Page::Schema => view! { <SchemaPage /> }.into_any(),
            Page::Table(table) => view! { <TablePage table=table /> }.into_any(),
            Page::Column(column) => view! { <ColumnPage column=column /> }.into_any(),
            Page::Step(step) => view! { <StepPage step=step /> }.into_any(),
            Page::Injectable(injectable) => {
                view! { <InjectablePage injectable=injectable /> }.into_any()
            }
            Page::Broadcast(broadcast) => {
                view! { <BroadcastPage broadcast=broadcast /> }.into_any()
            }
        }
    }
}
