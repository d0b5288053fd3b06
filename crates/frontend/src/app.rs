use crate::routes::routes::AppRoutes;
use crate::shared::config::BrowserConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: BrowserConfig) -> impl IntoView {
    // Read by every page through `BrowserConfig::current`
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
