//! Machinery shared by every entity view.
//!
//! ## Structure
//! - `entity` - [`EntityKind`]: what an entity reference must provide
//! - `machine` - [`TabMachine`]: active tab, per-tab content, stale-response guard
//! - `view_model` - [`EntityVm`]: the machine behind a signal, plus fetching
//! - `page` - [`EntityPage`]: header, view switch and active tab content
//! - `tab_content` - rendering of each [`TabPayload`](crate::shared::api::TabPayload) shape

pub mod entity;
pub mod machine;
pub mod page;
pub mod tab_content;
pub mod view_model;

pub use entity::EntityKind;
pub use machine::{FetchTicket, TabContent, TabMachine};
pub use page::EntityPage;
pub use view_model::EntityVm;
