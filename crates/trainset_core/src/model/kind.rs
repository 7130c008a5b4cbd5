//! Enumerated train kind.
//!
//! # Responsibility
//! - Define the closed set of service kinds and their integer codes.
//! - Convert between codes and kinds through one static kind list.
//!
//! # Invariants
//! - Codes are `0..=2` in declaration order and are never reused.
//! - `from_code` is the only way to turn a raw integer into a kind.

use crate::error::InvalidValue;

/// Service kind of a train.
///
/// Codes are part of the wire format; reordering variants breaks stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum TrainKind {
    /// Stops at every station.
    #[default]
    Local = 0,
    /// Skips minor stations.
    Rapid = 1,
    /// Reserved-seat express service.
    LimitedExpress = 2,
}

const ALL_KINDS: &[TrainKind] = &[
    TrainKind::Local,
    TrainKind::Rapid,
    TrainKind::LimitedExpress,
];

impl TrainKind {
    /// Returns every kind in code order.
    pub fn all() -> &'static [TrainKind] {
        ALL_KINDS
    }

    /// Returns the integer code written to the wire.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Resolves a raw code.
    ///
    /// # Errors
    /// - Returns `InvalidValue` carrying `code` when it names no known kind.
    pub fn from_code(code: i32) -> Result<Self, InvalidValue> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.code() == code)
            .ok_or(InvalidValue::new(code))
    }

    /// Display label used by train rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Rapid => "Rapid",
            Self::LimitedExpress => "LimitedExpress",
        }
    }
}

/// Looks up the label for a raw code without failing.
pub fn label_for_code(code: i32) -> Option<&'static str> {
    TrainKind::from_code(code).ok().map(TrainKind::label)
}

#[cfg(test)]
mod tests {
    use super::{label_for_code, TrainKind, ALL_KINDS};

    #[test]
    fn kind_list_is_dense_in_code_order() {
        for (index, kind) in ALL_KINDS.iter().enumerate() {
            assert_eq!(kind.code(), index as i32);
        }
        assert_eq!(ALL_KINDS.len(), 3);
    }

    #[test]
    fn labels_follow_code_order() {
        let labels: Vec<&str> = ALL_KINDS.iter().map(|kind| kind.label()).collect();
        assert_eq!(labels, vec!["Local", "Rapid", "LimitedExpress"]);
    }

    #[test]
    fn from_code_rejects_unknown_codes() {
        for code in [-1, 3, 42, i32::MAX, i32::MIN] {
            let err = TrainKind::from_code(code).unwrap_err();
            assert_eq!(err.value, code);
            assert_eq!(err.to_string(), format!("Invalid number {code}"));
        }
    }

    #[test]
    fn label_for_code_is_none_for_unknown_code() {
        assert_eq!(label_for_code(1), Some("Rapid"));
        assert_eq!(label_for_code(3), None);
    }
}
