//! Content region: the single slot top-level pages are mounted into.

use crate::routes::Page;
use leptos::prelude::*;

/// Handle to the content region, owned by the router and passed down explicitly
#[derive(Clone, Copy)]
pub struct ContentRegion {
    mounted: RwSignal<Option<Page>>,
}

impl ContentRegion {
    pub fn new() -> Self {
        Self {
            mounted: RwSignal::new(None),
        }
    }

    /// Replace whatever is mounted; the previous page is disposed
    pub fn mount(&self, page: Page) {
        self.mounted.set(Some(page));
    }

    pub fn page(&self) -> Option<Page> {
        self.mounted.get()
    }
}

impl Default for ContentRegion {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Center(region: ContentRegion) -> impl IntoView {
    view! {
        <main class="content">
            {move || region.page().map(Page::render)}
        </main>
    }
}
