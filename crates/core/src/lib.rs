//! Domain types shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod article;
pub mod error;
pub mod types;
