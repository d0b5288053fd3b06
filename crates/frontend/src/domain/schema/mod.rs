//! Schema root: link lists to every registered entity.

mod links;
mod page;

pub use links::SchemaLinks;
pub use page::SchemaPage;
