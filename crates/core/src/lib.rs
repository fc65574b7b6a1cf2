//! Pure domain logic for the CreatorHub console.
//!
//! This crate contains no database or network dependencies; everything here
//! is evaluated against pre-loaded data passed in by the caller. The `db`,
//! `bb`, and `api` crates build on these types.

pub mod completion;
pub mod content;
pub mod error;
pub mod mode;
pub mod profile;
pub mod roles;
pub mod starter_pack;
pub mod types;
