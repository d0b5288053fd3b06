//! Hash routing.
//!
//! ## Structure
//! - `matcher` - [`Router`]: ordered `(pattern, handler)` table, first match wins
//! - `page` - [`Page`]: top-level views and the route table producing them
//! - `routes` - [`AppRoutes`]: browser wiring (`hashchange`) and the content region

pub mod matcher;
pub mod page;
pub mod routes;

pub use matcher::{RouteParams, Router};
pub use page::{app_router, Page};
pub use routes::AppRoutes;
