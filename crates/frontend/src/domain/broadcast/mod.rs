//! Broadcast entity: how a cast table joins onto another.

use crate::domain::common::{EntityKind, EntityPage};
use crate::shared::api::Endpoint;
use crate::shared::api_utils::encode_segment;
use crate::shared::components::TabId;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastRef {
    pub cast: String,
    pub onto: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BroadcastTab {
    Definition,
}

impl TabId for BroadcastTab {
    const ALL: &'static [Self] = &[BroadcastTab::Definition];

    fn label(self) -> &'static str {
        "Definition"
    }
}

impl EntityKind for BroadcastRef {
    type Tab = BroadcastTab;

    const KIND: &'static str = "Broadcast";

    fn title(&self) -> String {
        format!("{} -> {}", self.cast, self.onto)
    }

    fn fragment(&self) -> String {
        format!(
            "broadcasts/{}/{}",
            encode_segment(&self.cast),
            encode_segment(&self.onto)
        )
    }

    fn endpoint(&self, _tab: BroadcastTab) -> Endpoint {
        Endpoint::BroadcastDefinition {
            cast: self.cast.clone(),
            onto: self.onto.clone(),
        }
    }
}

#[component]
pub fn BroadcastPage(broadcast: BroadcastRef) -> impl IntoView {
    view! { <EntityPage entity=broadcast /> }
}
