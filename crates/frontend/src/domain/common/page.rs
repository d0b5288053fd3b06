//! Generic page component for entity views

use super::entity::EntityKind;
use super::tab_content::TabContentView;
use super::view_model::EntityVm;
use crate::shared::components::{PageHeader, TabId, ViewSwitch};
use crate::shared::config::BrowserConfig;
use leptos::prelude::*;

/// Header, view switch (when the kind has more than one tab) and the active
/// tab's content. Fetches the initial tab on mount.
#[component]
pub fn EntityPage<E: EntityKind>(
    entity: E,
    /// Extra header actions
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let config = BrowserConfig::current();
    let title = entity.title();
    let vm = EntityVm::new(entity, &config);

    vm.mount();
    let vm_cleanup = vm.clone();
    on_cleanup(move || vm_cleanup.unmount());

    let active_tab = vm.active_tab();
    let active_view = vm.active_view();
    let vm_select = vm.clone();
    let on_change = Callback::new(move |tab: E::Tab| vm_select.select(tab));
    let show_switch = <E::Tab as TabId>::ALL.len() > 1;

    view! {
        <div class="entity-page">
            <PageHeader title=title kind=E::KIND>
                {children.map(|c| c())}
            </PageHeader>

            {show_switch.then(|| view! { <ViewSwitch active=active_tab on_change=on_change /> })}

            <div class="entity-page__content">
                {move || {
                    let (_, content) = active_view.get();
                    view! { <TabContentView content=content /> }
                }}
            </div>
        </div>
    }
}
