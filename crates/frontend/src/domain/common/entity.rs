use crate::shared::api::Endpoint;
use crate::shared::components::TabId;

/// Immutable reference to one browsable entity, built from route placeholders
pub trait EntityKind: Clone + Send + Sync + 'static {
    type Tab: TabId;

    /// Caption above the title ("Table", "Column", ...)
    const KIND: &'static str;

    fn title(&self) -> String;

    /// Route fragment of the entity's page, without the leading `#`
    fn fragment(&self) -> String;

    /// Endpoint fetched when `tab` becomes active
    fn endpoint(&self, tab: Self::Tab) -> Endpoint;

    fn href(&self) -> String {
        format!("#{}", self.fragment())
    }
}
