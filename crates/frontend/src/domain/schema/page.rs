use super::links::SchemaLinks;
use crate::shared::api::ApiClient;
use crate::shared::components::{LinkList, PageHeader};
use crate::shared::config::BrowserConfig;
use contracts::pipeline::SchemaListing;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Schema root view: fetches `/schema` once on mount
#[component]
pub fn SchemaPage() -> impl IntoView {
    let client = ApiClient::new(&BrowserConfig::current());
    let (listing, set_listing) = signal(None::<SchemaListing>);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match client.fetch_schema().await {
            Ok(data) => {
                // no-op when the page was unmounted meanwhile
                let _ = set_listing.try_set(Some(data));
            }
            Err(e) => {
                log::warn!("Failed to load schema: {}", e);
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="schema-page">
            <PageHeader title="Pipeline Schema" />

            {move || error.get().map(|e| view! {
                <div class="error-state">
                    <p class="error-title">"Failed to load the schema"</p>
                    <p class="error-message">{e}</p>
                </div>
            })}

            <Show
                when=move || listing.with(Option::is_some)
                fallback=move || error.with(Option::is_none).then(|| view! {
                    <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-xl);">
                        <Spinner />
                        <span>"Loading schema..."</span>
                    </Flex>
                })
            >
                {move || {
                    let links = listing
                        .with(|l| l.as_ref().map(SchemaLinks::from_listing))
                        .unwrap_or_default();
                    view! {
                        <div class="schema-page__lists">
                            <LinkList title="Tables" items=links.tables />
                            <LinkList title="Steps" items=links.steps />
                            <LinkList title="Injectables" items=links.injectables />
                            <LinkList title="Broadcasts" items=links.broadcasts />
                        </div>
                    }
                }}
            </Show>
        </div>
    }
}
