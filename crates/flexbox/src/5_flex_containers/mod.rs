//! Flex Containers: container properties and the per-pass configuration
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chapter8::{AlignContent, AlignItems, JustifyContent};
use crate::error::{AxisKind, FlexError};

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// True when the main axis runs vertically.
    #[inline]
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }

    /// True when boxes are placed from main-end towards main-start.
    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

impl FromStr for FlexDirection {
    type Err = FlexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "row" => Ok(Self::Row),
            "row-reverse" => Ok(Self::RowReverse),
            "column" => Ok(Self::Column),
            "column-reverse" => Ok(Self::ColumnReverse),
            _ => Err(FlexError::UnknownKeyword {
                property: "flex-direction",
                value: value.to_owned(),
            }),
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    /// True when overflow along the main axis starts a new line.
    #[inline]
    pub const fn wraps(self) -> bool {
        !matches!(self, Self::Nowrap)
    }
}

impl FromStr for FlexWrap {
    type Err = FlexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "nowrap" | "no-wrap" => Ok(Self::Nowrap),
            "wrap" => Ok(Self::Wrap),
            "wrap-reverse" => Ok(Self::WrapReverse),
            _ => Err(FlexError::UnknownKeyword {
                property: "flex-wrap",
                value: value.to_owned(),
            }),
        }
    }
}

/// Container configuration read by one measure + arrange pair.
///
/// Keywords (de)serialize with their CSS spelling, e.g. `"justify-content": "space-between"`.
/// Omitted fields take the CSS initial values, except spacing which defaults to zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FlexConfig {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    /// Spacing between adjacent columns, in px.
    pub column_spacing: f32,
    /// Spacing between adjacent rows, in px.
    pub row_spacing: f32,
}

impl FlexConfig {
    /// Reject spacing values the distribution formulas cannot use.
    ///
    /// # Errors
    /// Returns [`FlexError::InvalidSpacing`] when either spacing is negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), FlexError> {
        let is_column = self.direction.is_column();
        for (value, is_horizontal) in [(self.column_spacing, true), (self.row_spacing, false)] {
            if !value.is_finite() || value < 0.0 {
                let axis = if is_horizontal != is_column {
                    AxisKind::Main
                } else {
                    AxisKind::Cross
                };
                return Err(FlexError::InvalidSpacing { axis, value });
            }
        }
        Ok(())
    }
}
