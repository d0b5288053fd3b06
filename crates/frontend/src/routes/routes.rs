use super::matcher::Router;
use super::page::{app_router, Page};
use crate::layout::center::{Center, ContentRegion};
use crate::layout::Shell;
use leptos::ev::hashchange;
use leptos::logging::log;
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::window;

fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Mount the page matching `fragment`; a miss leaves the region as it is
fn navigate(router: &Router<Page>, region: ContentRegion, fragment: &str) {
    match router.navigate(fragment) {
        Some(page) => {
            log!("route {:?} -> {:?}", fragment, page);
            region.mount(page);
        }
        None => log::debug!("no route for {:?}", fragment),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let router = Arc::new(app_router());
    let region = ContentRegion::new();

    navigate(&router, region, &current_hash());

    let router_listener = Arc::clone(&router);
    let _ = window_event_listener(hashchange, move |_| {
        navigate(&router_listener, region, &current_hash());
    });

    view! {
        <Shell region=region>
            <Center region=region />
        </Shell>
    }
}
