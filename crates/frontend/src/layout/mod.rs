pub mod center;
pub mod top_header;

use center::ContentRegion;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |   TopHeader (brand + breadcrumbs)        |
/// +------------------------------------------+
/// |              Content region              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(region: ContentRegion, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader region=region />
            <div class="app-main">
                {children()}
            </div>
        </div>
    }
}
