//! Persistence formats for trains.
//!
//! # Responsibility
//! - Provide the two-line text format and the versioned JSON archive.
//! - Apply stage-then-commit on every read path.
//!
//! # Invariants
//! - Encoders are strict: corrupted kind codes fail with `InvalidValue`.
//! - Decoders never leave a caller-visible train partially updated.

pub mod archive;
pub mod text;
