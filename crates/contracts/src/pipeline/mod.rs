//! Payloads served by the pipeline introspection endpoints.
//!
//! ## Structure
//! - `schema` - the full schema listing behind `/schema`
//! - `definition` - `type`-tagged definitions of tables, columns, steps and injectables
//! - `tabular` - pandas "split" frames and series (previews, summary statistics)
//! - `injectable` - type/repr pair of an injected value
//! - `broadcast` - join parameters of a cast/onto broadcast

pub mod broadcast;
pub mod definition;
pub mod injectable;
pub mod schema;
pub mod tabular;

pub use broadcast::*;
pub use definition::*;
pub use injectable::*;
pub use schema::*;
pub use tabular::*;
