//! REST client for the external BB platform.
//!
//! This crate is the only place the platform credential exists: the api
//! crate hands the configured base URL and key to [`client::BbClient`],
//! which attaches the bearer header internally and normalizes every
//! response -- success or failure -- into a [`client::SyncOutcome`]
//! envelope. Mock-mode fixture data also lives here.

pub mod client;
pub mod fixtures;

pub use client::{BbClient, SyncOutcome};
