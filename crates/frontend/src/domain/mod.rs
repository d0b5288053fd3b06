pub mod broadcast;
pub mod column;
pub mod common;
pub mod injectable;
pub mod schema;
pub mod step;
pub mod table;
