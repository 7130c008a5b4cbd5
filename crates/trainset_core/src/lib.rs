//! Core library for trainset.
//! Owns the train record, its kind table, and the validated persistence formats.

pub mod codec;
pub mod error;
pub mod logging;
pub mod model;

pub use codec::archive::{ARCHIVE_FORMAT, ARCHIVE_VERSION};
pub use codec::text::{decode, encode, read_train, write_train};
pub use error::{CodecError, CodecResult, InvalidValue};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::kind::{label_for_code, TrainKind};
pub use model::train::{normalize_name, Train};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
