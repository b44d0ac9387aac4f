//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types and matching logic
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `From` conversions from wire to domain types
//! - `state.rs` — State containers with update methods
//! - `client.rs` — Sub-client with HTTP methods

pub mod coin;
