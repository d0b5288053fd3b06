//! Wire contracts shared between the schema browser and the pipeline server.

pub mod pipeline;
