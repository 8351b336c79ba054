//! Domain logic for the site builder.
//!
//! Everything in this crate is free of network and database access. The two
//! external collaborators the renderer and the cleanup path need (a template
//! source and a blob store) are reached through traits so the db and api
//! crates can plug in their implementations.

pub mod blob;
pub mod error;
pub mod render;
pub mod roles;
pub mod schema;
pub mod slug;
pub mod types;
pub mod website;
