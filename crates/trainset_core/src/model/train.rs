//! Train record.
//!
//! # Responsibility
//! - Hold a normalized name plus a kind stored as its integer code.
//! - Provide concatenation and best-effort rendering.
//!
//! # Invariants
//! - `name` contains no line breaks and no leading/trailing ASCII whitespace when
//!   built through `new`.
//! - `kind_code` is a valid `TrainKind` code unless it was written through
//!   `set_kind_code_unchecked`.
//! - Rendering never fails; persistence (see `codec`) rejects bad codes.

use crate::error::InvalidValue;
use crate::model::kind::{label_for_code, TrainKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::ops::Add;

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid line break regex"));

const UNKNOWN_KIND_LABEL: &str = "??";

/// Collapses every line break to one space and trims ASCII whitespace.
///
/// Non-ASCII spaces (U+3000, U+00A0) are part of the name and kept.
pub fn normalize_name(raw: &str) -> String {
    LINE_BREAK_RE
        .replace_all(raw, " ")
        .trim_matches(is_ascii_space)
        .to_string()
}

fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// A named train with a service kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Train {
    name: String,
    kind_code: i32,
}

impl Train {
    /// Creates a train, normalizing `name`.
    pub fn new(name: impl AsRef<str>, kind: TrainKind) -> Self {
        Self {
            name: normalize_name(name.as_ref()),
            kind_code: kind.code(),
        }
    }

    /// Builds a train from already-decoded parts without normalizing.
    pub(crate) fn from_raw_parts(name: String, kind: TrainKind) -> Self {
        Self {
            name,
            kind_code: kind.code(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves the stored code.
    ///
    /// # Errors
    /// - Returns `InvalidValue` when the stored code was corrupted.
    pub fn kind(&self) -> Result<TrainKind, InvalidValue> {
        TrainKind::from_code(self.kind_code)
    }

    /// Raw stored code, valid or not.
    pub fn kind_code(&self) -> i32 {
        self.kind_code
    }

    pub fn set_kind(&mut self, kind: TrainKind) {
        self.kind_code = kind.code();
    }

    /// Writes a raw code without validation.
    ///
    /// Used by import paths and tests that need to model corrupted state;
    /// the codec rejects such trains on output.
    pub fn set_kind_code_unchecked(&mut self, code: i32) {
        self.kind_code = code;
    }

    /// Checks the stored code against the kind table.
    pub fn validate(&self) -> Result<(), InvalidValue> {
        self.kind().map(|_| ())
    }

    /// Couples two trains: names joined by `-`, kind taken from `self`.
    pub fn concat(&self, other: &Train) -> Train {
        Train {
            name: format!("{}-{}", self.name, other.name),
            kind_code: self.kind_code,
        }
    }

    /// Human-readable description, `<name> runs as a <label>`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for Train {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = label_for_code(self.kind_code).unwrap_or(UNKNOWN_KIND_LABEL);
        write!(f, "{} runs as a {}", self.name, label)
    }
}

impl Add for &Train {
    type Output = Train;

    fn add(self, rhs: &Train) -> Train {
        self.concat(rhs)
    }
}

impl Add for Train {
    type Output = Train;

    fn add(self, rhs: Train) -> Train {
        self.concat(&rhs)
    }
}
