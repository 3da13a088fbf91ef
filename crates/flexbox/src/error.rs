//! Errors surfaced by the measure and arrange passes.

use core::fmt;

use thiserror::Error;

/// Axis a configuration problem was detected on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AxisKind {
    /// The axis boxes are laid out along.
    Main,
    /// The axis lines stack along.
    Cross,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => formatter.write_str("main"),
            Self::Cross => formatter.write_str("cross"),
        }
    }
}

/// Fatal layout errors. None of these are transient; a failed pass leaves every box untouched.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FlexError {
    /// A raw keyword did not name any value of the property.
    #[error("unknown {property} keyword `{value}`")]
    UnknownKeyword {
        property: &'static str,
        value: String,
    },
    /// Spacing must be finite and non-negative.
    #[error("invalid {axis}-axis spacing {value}")]
    InvalidSpacing { axis: AxisKind, value: f32 },
    /// The distribution policy would divide by a zero gap count.
    #[error("{policy} cannot distribute {axis}-axis space for line {line}: no gaps to distribute into")]
    DegenerateDistribution {
        policy: &'static str,
        axis: AxisKind,
        line: usize,
    },
    /// Arrangement was requested before any measurement.
    #[error("arrange requested without a prior measurement")]
    NotMeasured,
    /// The layout state was produced for different inputs than the ones passed to arrange.
    #[error("layout state does not match the arrange inputs: {reason}")]
    StaleLayout { reason: String },
}
