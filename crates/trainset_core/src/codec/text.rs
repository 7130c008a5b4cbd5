//! Two-line text format.
//!
//! ```text
//! <normalized name>\n
//! <decimal kind code>\n
//! ```
//!
//! # Responsibility
//! - Encode a train strictly: corrupted kind codes are rejected.
//! - Decode into a staged value and commit only after validation.
//!
//! # Invariants
//! - A failed `read_train` leaves the target untouched.
//! - A failed `write_train` writes nothing to the writer.
//! - Bytes after the kind line are never consumed.

use crate::error::{CodecError, CodecResult};
use crate::model::kind::TrainKind;
use crate::model::train::{normalize_name, Train};
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Formats `train` into its text form.
///
/// # Errors
/// - `CodecError::InvalidValue` when the stored kind code is out of range.
pub fn encode(train: &Train) -> CodecResult<String> {
    let kind = match train.kind() {
        Ok(kind) => kind,
        Err(err) => {
            warn!(
                "event=train_encode module=codec format=text status=rejected error_code=invalid_value value={}",
                err.value
            );
            return Err(err.into());
        }
    };

    Ok(format!("{}\n{}\n", normalize_name(train.name()), kind.code()))
}

/// Writes `train` to `writer` in text form.
///
/// The full record is formatted before the writer is touched, so a
/// rejected train produces no output.
pub fn write_train<W: Write>(writer: &mut W, train: &Train) -> CodecResult<()> {
    let text = encode(train)?;
    writer.write_all(text.as_bytes())?;
    debug!(
        "event=train_encode module=codec format=text status=ok bytes={}",
        text.len()
    );
    Ok(())
}

/// Reads one train from `reader` into `target`.
///
/// # Errors
/// - `CodecError::InvalidValue` when the kind line holds an unknown code.
/// - `CodecError::Stream` when either line is missing or the kind line is
///   not a decimal `i32`.
pub fn read_train<R: BufRead>(reader: &mut R, target: &mut Train) -> CodecResult<()> {
    match read_staged(reader) {
        Ok(staged) => {
            debug!(
                "event=train_decode module=codec format=text status=ok name_len={}",
                staged.name().len()
            );
            *target = staged;
            Ok(())
        }
        Err(err) => {
            match &err {
                CodecError::InvalidValue(invalid) => warn!(
                    "event=train_decode module=codec format=text status=rejected error_code=invalid_value value={}",
                    invalid.value
                ),
                other => warn!(
                    "event=train_decode module=codec format=text status=error error_code=stream_error error={}",
                    other
                ),
            }
            Err(err)
        }
    }
}

/// Decodes a train from a complete text buffer.
pub fn decode(text: &str) -> CodecResult<Train> {
    let mut train = Train::default();
    read_train(&mut text.as_bytes(), &mut train)?;
    Ok(train)
}

impl Train {
    /// Text form of this train; see [`encode`].
    pub fn to_text(&self) -> CodecResult<String> {
        encode(self)
    }

    /// Replaces `self` with the train decoded from `text`.
    ///
    /// On error `self` keeps its previous name and kind.
    pub fn load_from_text(&mut self, text: &str) -> CodecResult<()> {
        read_train(&mut text.as_bytes(), self)
    }
}

fn read_staged<R: BufRead>(reader: &mut R) -> CodecResult<Train> {
    let mut name = String::new();
    if reader.read_line(&mut name)? == 0 {
        return Err(CodecError::stream("missing name line"));
    }
    if name.ends_with('\n') {
        name.pop();
    }

    let mut code_line = String::new();
    if reader.read_line(&mut code_line)? == 0 {
        return Err(CodecError::stream("missing kind line"));
    }
    let code = parse_code(code_line.trim())?;
    let kind = TrainKind::from_code(code)?;

    Ok(Train::from_raw_parts(name, kind))
}

fn parse_code(raw: &str) -> CodecResult<i32> {
    if raw.is_empty() {
        return Err(CodecError::stream("empty kind line"));
    }
    raw.parse::<i32>()
        .map_err(|err| CodecError::stream(format!("malformed kind code `{raw}`: {err}")))
}
