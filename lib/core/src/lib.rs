//! Core types shared across the graph-search-chat crates.
//!
//! This crate provides the `Result` alias used by every library crate and
//! the opaque identifier newtypes that flow between the answer service, the
//! identity endpoint and the UI.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{CitationId, HitId, UserId};
