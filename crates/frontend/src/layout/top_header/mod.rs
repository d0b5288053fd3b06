//! Top bar: application title and the breadcrumb trail of the mounted page.

use crate::layout::center::ContentRegion;
use leptos::prelude::*;

#[component]
pub fn TopHeader(region: ContentRegion) -> impl IntoView {
    let crumbs = move || region.page().map(|p| p.breadcrumbs()).unwrap_or_default();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <a class="top-header__title" href="#">"Pipeline Browser"</a>
            </div>
            <nav class="top-header__breadcrumbs">
                {move || {
                    crumbs()
                        .into_iter()
                        .map(|(label, href)| view! {
                            <a class="top-header__crumb" href=href>{label}</a>
                        })
                        .collect_view()
                }}
            </nav>
        </div>
    }
}
