//! Main-axis justification of the items within one line.

use log::debug;

use super::JustifyContent;
use crate::error::{AxisKind, FlexError};

/// Where the first item of a line starts and how far apart consecutive items sit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MainDistribution {
    /// Offset of the first item from main-start.
    pub start: f32,
    /// Distance added between one item's main-end and the next item's main-start.
    pub spacing: f32,
}

/// Inputs describing one line along the main axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineMain {
    /// Index of the line in visual order, used for error reporting.
    pub line: usize,
    /// Summed main extent of the line's items.
    pub extent: f32,
    /// Number of items in the line; never zero for a packed line.
    pub item_count: usize,
}

/// Compute justify-content start offset and per-gap spacing for one line.
///
/// With `k = item_count - 1` gaps and configured `spacing`:
/// - flex-start: start `0`, gap `spacing`
/// - flex-end: start `size - extent - k * spacing`
/// - center and space-around: start `(size - extent - k * spacing) / 2`
/// - space-between: start `0`, gap `(size - extent) / k`
/// - space-evenly: start and gap `(size - extent) / (k + 2)`
///
/// # Errors
/// Returns [`FlexError::DegenerateDistribution`] for space-between on a single-item line,
/// which has no gap to distribute into.
pub fn justify_params(
    justify: JustifyContent,
    container_main: f32,
    line: LineMain,
    spacing: f32,
) -> Result<MainDistribution, FlexError> {
    let gaps = line.item_count.saturating_sub(1);
    let gaps_f = gaps as f32;
    let leftover = container_main - line.extent - gaps_f * spacing;
    let distribution = match justify {
        JustifyContent::FlexStart => MainDistribution {
            start: 0.0,
            spacing,
        },
        JustifyContent::FlexEnd => MainDistribution {
            start: leftover,
            spacing,
        },
        JustifyContent::Center | JustifyContent::SpaceAround => MainDistribution {
            start: leftover / 2.0,
            spacing,
        },
        JustifyContent::SpaceBetween => {
            if gaps == 0 {
                return Err(FlexError::DegenerateDistribution {
                    policy: "space-between",
                    axis: AxisKind::Main,
                    line: line.line,
                });
            }
            MainDistribution {
                start: 0.0,
                spacing: (container_main - line.extent) / gaps_f,
            }
        }
        JustifyContent::SpaceEvenly => {
            let gap = (container_main - line.extent) / (gaps_f + 2.0);
            MainDistribution {
                start: gap,
                spacing: gap,
            }
        }
    };
    debug!(
        target: "flexbox::arrange",
        "[JUSTIFY] line={} mode={:?} container_main={:.3} extent={:.3} items={} start={:.3} spacing={:.3}",
        line.line,
        justify,
        container_main,
        line.extent,
        line.item_count,
        distribution.start,
        distribution.spacing
    );
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn line_of(extent: f32, item_count: usize) -> LineMain {
        LineMain {
            line: 0,
            extent,
            item_count,
        }
    }

    fn params(justify: JustifyContent, extent: f32, count: usize, spacing: f32) -> MainDistribution {
        justify_params(justify, 200.0, line_of(extent, count), spacing).unwrap_or(MainDistribution {
            start: f32::NAN,
            spacing: f32::NAN,
        })
    }

    fn assert_close(got: MainDistribution, start: f32, spacing: f32) {
        assert!((got.start - start).abs() < 0.001, "start {got:?} != {start}");
        assert!((got.spacing - spacing).abs() < 0.001, "spacing {got:?} != {spacing}");
    }

    #[test]
    /// # Panics
    /// Panics if the packing policies do not account for configured spacing.
    fn packing_policies() {
        // three items, 120 total, spacing 10 → leftover = 200 - 120 - 20 = 60
        assert_close(params(JustifyContent::FlexStart, 120.0, 3, 10.0), 0.0, 10.0);
        assert_close(params(JustifyContent::FlexEnd, 120.0, 3, 10.0), 60.0, 10.0);
        assert_close(params(JustifyContent::Center, 120.0, 3, 10.0), 30.0, 10.0);
        assert_close(params(JustifyContent::SpaceAround, 120.0, 3, 10.0), 30.0, 10.0);
    }

    #[test]
    /// # Panics
    /// Panics if the spreading policies ignore configured spacing in the wrong way.
    fn spreading_policies() {
        // space-between replaces spacing: (200 - 100) / 1
        assert_close(params(JustifyContent::SpaceBetween, 100.0, 2, 10.0), 0.0, 100.0);
        // space-evenly: (200 - 100) / (1 + 2)
        let third = 100.0 / 3.0;
        assert_close(params(JustifyContent::SpaceEvenly, 100.0, 2, 10.0), third, third);
        // single item space-evenly centers it
        assert_close(params(JustifyContent::SpaceEvenly, 50.0, 1, 0.0), 75.0, 75.0);
    }

    #[test]
    /// # Panics
    /// Panics if space-between on a single-item line is not rejected.
    fn space_between_single_item_is_rejected() {
        let result = justify_params(
            JustifyContent::SpaceBetween,
            200.0,
            LineMain {
                line: 3,
                extent: 50.0,
                item_count: 1,
            },
            0.0,
        );
        assert_eq!(
            result,
            Err(FlexError::DegenerateDistribution {
                policy: "space-between",
                axis: AxisKind::Main,
                line: 3,
            })
        );
    }
}
