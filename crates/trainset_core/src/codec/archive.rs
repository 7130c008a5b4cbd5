//! Versioned JSON archive.
//!
//! An archive carries a format tag and revision alongside the record:
//!
//! ```json
//! {"format":"trainset","version":1,"name":"Sunrise Izumo","kind":2}
//! ```
//!
//! # Invariants
//! - `save` rejects corrupted kind codes before producing any output.
//! - `load_into` commits only a fully validated record.
//! - Archives from a newer revision are refused, never partially read.

use crate::error::{CodecError, CodecResult};
use crate::model::kind::TrainKind;
use crate::model::train::{normalize_name, Train};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Format tag written into every archive.
pub const ARCHIVE_FORMAT: &str = "trainset";
/// Latest archive revision this build reads and writes.
pub const ARCHIVE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ArchiveEnvelope {
    format: String,
    version: u32,
    name: String,
    kind: i32,
}

/// Serializes `train` into an archive string.
///
/// # Errors
/// - `CodecError::InvalidValue` when the stored kind code is out of range.
pub fn save(train: &Train) -> CodecResult<String> {
    let kind = match train.kind() {
        Ok(kind) => kind,
        Err(err) => {
            warn!(
                "event=train_encode module=codec format=archive status=rejected error_code=invalid_value value={}",
                err.value
            );
            return Err(err.into());
        }
    };

    let envelope = ArchiveEnvelope {
        format: ARCHIVE_FORMAT.to_string(),
        version: ARCHIVE_VERSION,
        name: normalize_name(train.name()),
        kind: kind.code(),
    };
    let json = serde_json::to_string(&envelope)?;
    debug!(
        "event=train_encode module=codec format=archive status=ok bytes={}",
        json.len()
    );
    Ok(json)
}

/// Loads an archive into `target`, leaving it untouched on any error.
///
/// # Errors
/// - `CodecError::Stream` for malformed JSON or a foreign format tag.
/// - `CodecError::UnsupportedVersion` for archives newer than
///   [`ARCHIVE_VERSION`].
/// - `CodecError::InvalidValue` for an unknown kind code.
pub fn load_into(text: &str, target: &mut Train) -> CodecResult<()> {
    match stage(text) {
        Ok(staged) => {
            debug!(
                "event=train_decode module=codec format=archive status=ok name_len={}",
                staged.name().len()
            );
            *target = staged;
            Ok(())
        }
        Err(err) => {
            warn!(
                "event=train_decode module=codec format=archive status=error error_code={} error={}",
                error_code(&err),
                err
            );
            Err(err)
        }
    }
}

/// Loads a fresh train from an archive.
pub fn load(text: &str) -> CodecResult<Train> {
    let mut train = Train::default();
    load_into(text, &mut train)?;
    Ok(train)
}

fn stage(text: &str) -> CodecResult<Train> {
    let envelope: ArchiveEnvelope = serde_json::from_str(text)?;

    if envelope.format != ARCHIVE_FORMAT {
        return Err(CodecError::stream(format!(
            "unexpected archive format `{}`",
            envelope.format
        )));
    }
    if envelope.version == 0 {
        return Err(CodecError::stream("archive version 0 is not valid"));
    }
    if envelope.version > ARCHIVE_VERSION {
        return Err(CodecError::UnsupportedVersion {
            found: envelope.version,
            latest_supported: ARCHIVE_VERSION,
        });
    }

    let kind = TrainKind::from_code(envelope.kind)?;
    Ok(Train::from_raw_parts(envelope.name, kind))
}

fn error_code(err: &CodecError) -> &'static str {
    match err {
        CodecError::InvalidValue(_) => "invalid_value",
        CodecError::Stream(_) => "stream_error",
        CodecError::UnsupportedVersion { .. } => "unsupported_version",
    }
}

#[cfg(test)]
mod tests {
    use super::{load, stage, ARCHIVE_VERSION};
    use crate::error::CodecError;

    #[test]
    fn stage_rejects_foreign_format_tag() {
        let err = stage(r#"{"format":"other","version":1,"name":"x","kind":0}"#).unwrap_err();
        assert!(err.to_string().contains("unexpected archive format `other`"));
    }

    #[test]
    fn stage_rejects_zero_version() {
        let err = stage(r#"{"format":"trainset","version":0,"name":"x","kind":0}"#).unwrap_err();
        assert!(matches!(err, CodecError::Stream(_)));
    }

    #[test]
    fn load_reports_newer_revision() {
        let text = format!(
            r#"{{"format":"trainset","version":{},"name":"x","kind":0}}"#,
            ARCHIVE_VERSION + 1
        );
        let err = load(&text).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnsupportedVersion {
                found,
                latest_supported: ARCHIVE_VERSION,
            } if found == ARCHIVE_VERSION + 1
        ));
    }
}
