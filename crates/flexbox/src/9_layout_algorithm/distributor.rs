//! Arrange pass: distribute lines along the cross axis and items along the main axis.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#main-alignment>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-alignment>

use log::debug;

use super::{FlexLine, LayoutState};
use crate::chapter5::FlexConfig;
use crate::chapter6::FlexItem;
use crate::chapter7::{Rect, Size, Uv};
use crate::chapter8::cross_axis::{LinesCross, align_content_params, align_item_cross};
use crate::chapter8::main_axis::{LineMain, justify_params};
use crate::error::FlexError;

/// Final rect for the box at `index` in the host collection.
type Placement = (usize, Rect);

/// Axis-resolved constants shared by every line of one arrange pass.
#[derive(Copy, Clone, Debug)]
struct ArrangeFrame {
    is_column: bool,
    reverse: bool,
    size: Uv,
    spacing: Uv,
}

/// One line's position in the cross-axis stack.
#[derive(Copy, Clone, Debug)]
struct LineSlot<'line> {
    /// Index in visual order.
    index: usize,
    line: &'line FlexLine,
    /// Cross offset of the line's cross-start edge.
    cross_start: f32,
    /// Line cross extent after align-content scaling.
    cross_extent: f32,
}

/// Place the boxes of one line.
fn place_line<B: FlexItem>(
    config: &FlexConfig,
    frame: &ArrangeFrame,
    state: &LayoutState,
    items: &[B],
    slot: LineSlot<'_>,
    placements: &mut Vec<Placement>,
) -> Result<(), FlexError> {
    let LineSlot {
        index: line_index,
        line: flex_line,
        cross_start,
        cross_extent,
    } = slot;
    let main = justify_params(
        config.justify_content,
        frame.size.u,
        LineMain {
            line: line_index,
            extent: flex_line.main_extent(),
            item_count: flex_line.len(),
        },
        frame.spacing.u,
    )?;
    let members = state
        .order()
        .get(flex_line.range())
        .ok_or_else(|| FlexError::StaleLayout {
            reason: format!("line {line_index} lies outside the measured sequence"),
        })?;

    let mut main_cursor = main.start;
    for &index in members {
        let item = items.get(index).ok_or_else(|| FlexError::StaleLayout {
            reason: format!("box {index} is missing from the collection"),
        })?;
        let desired = Uv::from_size(item.desired_size(), frame.is_column);
        let align = item.align_self().unwrap_or(config.align_items);
        let cross = align_item_cross(align, cross_start, cross_extent, desired.v);
        let main_offset = if frame.reverse {
            frame.size.u - desired.u - main_cursor
        } else {
            main_cursor
        };
        let origin = Uv::new(main_offset, cross.cross_offset).to_point(frame.is_column);
        let extent = Uv::new(desired.u, cross.cross_size).to_size(frame.is_column);
        placements.push((index, Rect::new(origin, extent)));
        main_cursor += desired.u + main.spacing;
    }
    Ok(())
}

/// Compute every box's rect without touching any box.
fn plan_placements<B: FlexItem>(
    config: &FlexConfig,
    final_size: Size,
    state: &LayoutState,
    items: &[B],
) -> Result<Vec<Placement>, FlexError> {
    let is_column = config.direction.is_column();
    let frame = ArrangeFrame {
        is_column,
        reverse: config.direction.is_reverse(),
        size: Uv::from_size(final_size, is_column),
        spacing: Uv::from_spacing(config.column_spacing, config.row_spacing, is_column),
    };
    let lines = state.lines();
    let content = align_content_params(
        config.align_content,
        frame.size.v,
        LinesCross {
            total_extent: lines.iter().map(FlexLine::cross_extent).sum(),
            line_count: lines.len(),
        },
        frame.spacing.v,
    )?;

    let mut placements = Vec::with_capacity(state.order().len());
    let mut cross_cursor = content.start;
    for (line_index, flex_line) in lines.iter().enumerate() {
        let line_cross = content.scale * flex_line.cross_extent();
        place_line(
            config,
            &frame,
            state,
            items,
            LineSlot {
                index: line_index,
                line: flex_line,
                cross_start: cross_cursor,
                cross_extent: line_cross,
            },
            &mut placements,
        )?;
        debug!(
            target: "flexbox::arrange",
            "[ARRANGE] line={line_index} cross_start={cross_cursor:.3} cross_extent={line_cross:.3}"
        );
        cross_cursor += line_cross + content.spacing;
    }
    Ok(placements)
}

/// Position and size every visible box within `final_size` using the lines from `state`.
///
/// Every rect is computed before the first box is touched, so an error leaves all boxes as they
/// were. Returns `final_size`.
///
/// # Errors
/// - [`FlexError::StaleLayout`] when `state` was measured from a different collection, from a
///   different visible order, or with different measurement-affecting configuration.
/// - [`FlexError::DegenerateDistribution`] when `space-between` has no gap to distribute into.
pub fn arrange<B: FlexItem>(
    config: &FlexConfig,
    final_size: Size,
    state: &LayoutState,
    items: &mut [B],
) -> Result<Size, FlexError> {
    state.verify(config, items)?;
    let placements = plan_placements(config, final_size, state, items)?;
    debug!(
        target: "flexbox::arrange",
        "[ARRANGE] direction={:?} final=({:.3}, {:.3}) placed={}",
        config.direction,
        final_size.width,
        final_size.height,
        placements.len()
    );
    for (index, rect) in placements {
        if let Some(item) = items.get_mut(index) {
            item.arrange(rect);
        }
    }
    Ok(final_size)
}
