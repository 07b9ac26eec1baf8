//! SeaORM entities for the posts schema.

pub mod post;
