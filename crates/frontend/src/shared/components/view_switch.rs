//! View-switch control: a labeled button group selecting one tab.

use leptos::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;
use thaw::{Button, ButtonAppearance, Space};

/// Identifier of one tab in a fixed, ordered tab set
pub trait TabId: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Declared tabs in display order; never empty, the first is the initial tab
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn initial() -> Self {
        Self::ALL[0]
    }
}

/// Tab to report for a click on `clicked`, or `None` when it is already active
pub fn switch_target<T: TabId>(active: T, clicked: T) -> Option<T> {
    (active != clicked).then_some(clicked)
}

/// One button per declared tab; `on_change` fires only for non-active tabs
#[component]
pub fn ViewSwitch<T: TabId>(active: Signal<T>, on_change: Callback<T>) -> impl IntoView {
    view! {
        <div class="view-switch" role="group">
            <Space>
                {T::ALL
                    .iter()
                    .copied()
                    .map(|tab| {
                        view! {
                            <Button
                                appearance=move || {
                                    if active.get() == tab {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                }
                                on_click=move |_| {
                                    if let Some(next) = switch_target(active.get_untracked(), tab) {
                                        on_change.run(next);
                                    }
                                }
                            >
                                {tab.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Space>
        </div>
    }
}
