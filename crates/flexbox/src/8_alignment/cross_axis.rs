//! Cross-axis distribution: lines within the container and items within a line.

use log::debug;

use super::{AlignContent, AlignItems};
use crate::error::{AxisKind, FlexError};

/// How lines are laid out along the cross axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineDistribution {
    /// Cross offset of the first line.
    pub start: f32,
    /// Distance between one line's cross-end and the next line's cross-start.
    pub spacing: f32,
    /// Factor applied to every line's cross extent.
    pub scale: f32,
}

/// Aggregate cross-axis inputs for the lines of one container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinesCross {
    /// Sum of the lines' cross extents.
    pub total_extent: f32,
    /// Number of lines.
    pub line_count: usize,
}

/// Compute align-content start offset, per-gap spacing and line scale.
///
/// With `n` lines, configured `spacing`, `gaps = (n - 1) * spacing` and
/// `total = total_extent + gaps`:
/// - flex-start / flex-end / center: pack `total` against start, end or the middle
/// - stretch: start `0`, scale `(size - gaps) / total_extent`
/// - space-between: gap `spacing + (size - total) / (n - 1)`
/// - space-around: gap `(size - total_extent) / n`, start half a gap
/// - space-evenly: start and gap `(size - total_extent) / (n + 1)`
///
/// Stretching lines that are all zero-sized leaves the scale at 1.
///
/// # Errors
/// Returns [`FlexError::DegenerateDistribution`] for space-between over a single line.
pub fn align_content_params(
    align: AlignContent,
    container_cross: f32,
    lines: LinesCross,
    spacing: f32,
) -> Result<LineDistribution, FlexError> {
    let count = lines.line_count;
    let count_f = count as f32;
    let gaps_total = count.saturating_sub(1) as f32 * spacing;
    let total = lines.total_extent + gaps_total;
    let packed = |start: f32| LineDistribution {
        start,
        spacing,
        scale: 1.0,
    };
    let distribution = match align {
        _ if count == 0 => packed(0.0),
        AlignContent::FlexStart => packed(0.0),
        AlignContent::FlexEnd => packed(container_cross - total),
        AlignContent::Center => packed((container_cross - total) / 2.0),
        AlignContent::Stretch => {
            let scale = if lines.total_extent > 0.0 {
                (container_cross - gaps_total) / lines.total_extent
            } else {
                1.0
            };
            LineDistribution {
                start: 0.0,
                spacing,
                scale,
            }
        }
        AlignContent::SpaceBetween => {
            if count < 2 {
                return Err(FlexError::DegenerateDistribution {
                    policy: "space-between",
                    axis: AxisKind::Cross,
                    line: 0,
                });
            }
            LineDistribution {
                start: 0.0,
                spacing: spacing + (container_cross - total) / (count_f - 1.0),
                scale: 1.0,
            }
        }
        AlignContent::SpaceAround => {
            let gap = (container_cross - lines.total_extent) / count_f;
            LineDistribution {
                start: gap / 2.0,
                spacing: gap,
                scale: 1.0,
            }
        }
        AlignContent::SpaceEvenly => {
            let gap = (container_cross - lines.total_extent) / (count_f + 1.0);
            LineDistribution {
                start: gap,
                spacing: gap,
                scale: 1.0,
            }
        }
    };
    debug!(
        target: "flexbox::arrange",
        "[ALIGN-CONTENT] mode={:?} container_cross={:.3} lines_total={:.3} line_count={} start={:.3} spacing={:.3} scale={:.3}",
        align,
        container_cross,
        lines.total_extent,
        count,
        distribution.start,
        distribution.spacing,
        distribution.scale
    );
    Ok(distribution)
}

/// Cross-axis offset and size of one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrossPlacement {
    pub cross_offset: f32,
    pub cross_size: f32,
}

/// Align an item of cross size `item_cross` within a line starting at `line_start` whose
/// (possibly stretched) cross extent is `line_cross`.
///
/// Only `stretch` changes the item's size; the other modes reposition it.
#[inline]
pub fn align_item_cross(
    align: AlignItems,
    line_start: f32,
    line_cross: f32,
    item_cross: f32,
) -> CrossPlacement {
    match align {
        AlignItems::FlexStart => CrossPlacement {
            cross_offset: line_start,
            cross_size: item_cross,
        },
        AlignItems::FlexEnd => CrossPlacement {
            cross_offset: line_start + line_cross - item_cross,
            cross_size: item_cross,
        },
        AlignItems::Center => CrossPlacement {
            cross_offset: line_start + (line_cross - item_cross) / 2.0,
            cross_size: item_cross,
        },
        AlignItems::Stretch => CrossPlacement {
            cross_offset: line_start,
            cross_size: line_cross,
        },
    }
}
