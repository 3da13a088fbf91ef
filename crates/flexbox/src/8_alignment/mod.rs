//! Alignment: distribution policies along both axes
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlexError;

pub mod cross_axis;
pub mod main_axis;

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    /// Number of extra spacing slots reserved around a line when sizing it.
    ///
    /// `space-evenly` puts a gap before the first and after the last item, so a line of `m`
    /// items occupies `m - 1 + 2` gaps.
    #[inline]
    pub const fn reserved_gaps(self) -> usize {
        if matches!(self, Self::SpaceEvenly) {
            2
        } else {
            0
        }
    }
}

impl FromStr for JustifyContent {
    type Err = FlexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flex-start" | "start" => Ok(Self::FlexStart),
            "flex-end" | "end" => Ok(Self::FlexEnd),
            "center" => Ok(Self::Center),
            "space-between" => Ok(Self::SpaceBetween),
            "space-around" => Ok(Self::SpaceAround),
            "space-evenly" => Ok(Self::SpaceEvenly),
            _ => Err(FlexError::UnknownKeyword {
                property: "justify-content",
                value: value.to_owned(),
            }),
        }
    }
}

/// Cross-axis alignment of an item within its line; also the type of `align-self`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    #[default]
    Stretch,
}

impl FromStr for AlignItems {
    type Err = FlexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flex-start" | "start" => Ok(Self::FlexStart),
            "flex-end" | "end" => Ok(Self::FlexEnd),
            "center" => Ok(Self::Center),
            "stretch" => Ok(Self::Stretch),
            _ => Err(FlexError::UnknownKeyword {
                property: "align-items",
                value: value.to_owned(),
            }),
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    FlexStart,
    FlexEnd,
    Center,
    #[default]
    Stretch,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl FromStr for AlignContent {
    type Err = FlexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flex-start" | "start" => Ok(Self::FlexStart),
            "flex-end" | "end" => Ok(Self::FlexEnd),
            "center" => Ok(Self::Center),
            "stretch" => Ok(Self::Stretch),
            "space-between" => Ok(Self::SpaceBetween),
            "space-around" => Ok(Self::SpaceAround),
            "space-evenly" => Ok(Self::SpaceEvenly),
            _ => Err(FlexError::UnknownKeyword {
                property: "align-content",
                value: value.to_owned(),
            }),
        }
    }
}
