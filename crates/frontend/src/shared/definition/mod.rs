//! Kind-tag dispatch for definition payloads.

pub mod panel;
pub mod view;

pub use panel::DefinitionPanel;
pub use view::{render_definition, DefinitionView};
