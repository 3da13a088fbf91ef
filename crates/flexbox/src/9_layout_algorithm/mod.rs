//! Flex Layout Algorithm: line collection (measure) and line/item distribution (arrange)
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

use core::ops::Range;

use crate::chapter5::{FlexConfig, FlexDirection, FlexWrap};
use crate::chapter6::{FlexItem, collect_flex_items};
use crate::chapter7::Size;
use crate::chapter8::JustifyContent;
use crate::error::FlexError;

mod distributor;
mod line_builder;

pub use distributor::arrange;
pub use line_builder::measure;

/// A run of boxes sharing one cross-axis band.
///
/// `first..=last` indexes the ordered visible sequence recorded in [`LayoutState::order`],
/// not the host's collection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexLine {
    first: usize,
    last: usize,
    main_extent: f32,
    cross_extent: f32,
}

impl FlexLine {
    pub(crate) const fn new(first: usize, last: usize, main_extent: f32, cross_extent: f32) -> Self {
        Self {
            first,
            last,
            main_extent,
            cross_extent,
        }
    }

    #[inline]
    pub const fn first(&self) -> usize {
        self.first
    }

    /// Inclusive end of the line.
    #[inline]
    pub const fn last(&self) -> usize {
        self.last
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Packed lines always hold at least one box.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Half-open range over [`LayoutState::order`].
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.first..self.last + 1
    }

    /// Sum of the members' main extents, without spacing.
    #[inline]
    pub const fn main_extent(&self) -> f32 {
        self.main_extent
    }

    /// Largest cross extent among the members.
    #[inline]
    pub const fn cross_extent(&self) -> f32 {
        self.cross_extent
    }
}

/// The part of the configuration that shapes the line list.
///
/// Alignment-only settings are absent: changing them needs a new arrange pass, not a new
/// measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
struct MeasureKey {
    direction: FlexDirection,
    wrap: FlexWrap,
    justify_content: JustifyContent,
    column_spacing: f32,
    row_spacing: f32,
}

impl MeasureKey {
    const fn of(config: &FlexConfig) -> Self {
        Self {
            direction: config.direction,
            wrap: config.wrap,
            justify_content: config.justify_content,
            column_spacing: config.column_spacing,
            row_spacing: config.row_spacing,
        }
    }
}

/// What a measure pass hands to its paired arrange pass. Opaque to hosts.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutState {
    order: Vec<usize>,
    lines: Vec<FlexLine>,
    item_count: usize,
    key: MeasureKey,
}

impl LayoutState {
    /// Indices into the host collection of the visible boxes, in layout order.
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Lines in visual cross-axis order (already reversed for `wrap-reverse`).
    #[inline]
    pub fn lines(&self) -> &[FlexLine] {
        &self.lines
    }

    /// True when no visible box took part in the measurement.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check that `config` and `items` are the inputs this state was measured from.
    fn verify<B: FlexItem>(&self, config: &FlexConfig, items: &[B]) -> Result<(), FlexError> {
        if items.len() != self.item_count {
            return Err(FlexError::StaleLayout {
                reason: format!(
                    "collection holds {} boxes, measured {}",
                    items.len(),
                    self.item_count
                ),
            });
        }
        if MeasureKey::of(config) != self.key {
            return Err(FlexError::StaleLayout {
                reason: "direction, wrap, justify-content or spacing changed since measure"
                    .to_owned(),
            });
        }
        if collect_flex_items(items) != self.order {
            return Err(FlexError::StaleLayout {
                reason: "box visibility or order changed since measure".to_owned(),
            });
        }
        Ok(())
    }
}

/// Result of a measure pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    /// State to pass unchanged to [`arrange`].
    pub state: LayoutState,
    /// Size the whole layout would like to occupy.
    pub desired: Size,
}

#[cfg(test)]
mod tests;
