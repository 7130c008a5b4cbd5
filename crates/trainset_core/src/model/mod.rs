//! Domain model for trains and their service kinds.
//!
//! # Responsibility
//! - Define the record type and the closed kind enumeration.
//! - Keep name normalization in one place.
//!
//! # Invariants
//! - Kind codes are resolved only through the static kind table.

pub mod kind;
pub mod train;
