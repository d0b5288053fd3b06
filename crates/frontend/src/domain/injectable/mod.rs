//! Injectable entity: definition and runtime repr of an injected value.

use crate::domain::common::{EntityKind, EntityPage};
use crate::shared::api::Endpoint;
use crate::shared::api_utils::encode_segment;
use crate::shared::components::TabId;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectableRef {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InjectableTab {
    Definition,
    Repr,
}

impl TabId for InjectableTab {
    const ALL: &'static [Self] = &[InjectableTab::Definition, InjectableTab::Repr];

    fn label(self) -> &'static str {
        match self {
            InjectableTab::Definition => "Definition",
            InjectableTab::Repr => "Repr",
        }
    }
}

impl EntityKind for InjectableRef {
    type Tab = InjectableTab;

    const KIND: &'static str = "Injectable";

    fn title(&self) -> String {
        self.name.clone()
    }

    fn fragment(&self) -> String {
        format!("injectables/{}", encode_segment(&self.name))
    }

    fn endpoint(&self, tab: InjectableTab) -> Endpoint {
        let name = self.name.clone();
        match tab {
            InjectableTab::Definition => Endpoint::InjectableDefinition { name },
            InjectableTab::Repr => Endpoint::InjectableRepr { name },
        }
    }
}

#[component]
pub fn InjectablePage(injectable: InjectableRef) -> impl IntoView {
    view! { <EntityPage entity=injectable /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injectable_endpoints() {
        let year = InjectableRef {
            name: "year".to_string(),
        };
        assert_eq!(InjectableTab::initial(), InjectableTab::Definition);
        assert_eq!(
            year.endpoint(InjectableTab::Definition).path(),
            "/injectables/year/definition"
        );
        assert_eq!(year.endpoint(InjectableTab::Repr).path(), "/injectables/year/repr");
    }
}
