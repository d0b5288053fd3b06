//! Step entity: the source of one registered step.

use crate::domain::common::{EntityKind, EntityPage};
use crate::shared::api::Endpoint;
use crate::shared::api_utils::encode_segment;
use crate::shared::components::TabId;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRef {
    pub step: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepTab {
    Definition,
}

impl TabId for StepTab {
    const ALL: &'static [Self] = &[StepTab::Definition];

    fn label(self) -> &'static str {
        "Definition"
    }
}

impl EntityKind for StepRef {
    type Tab = StepTab;

    const KIND: &'static str = "Step";

    fn title(&self) -> String {
        self.step.clone()
    }

    fn fragment(&self) -> String {
        format!("steps/{}", encode_segment(&self.step))
    }

    fn endpoint(&self, _tab: StepTab) -> Endpoint {
        Endpoint::StepDefinition {
            step: self.step.clone(),
        }
    }
}

#[component]
pub fn StepPage(step: StepRef) -> impl IntoView {
    view! { <EntityPage entity=step /> }
}
