//! Measure pass: greedy line packing along the main axis.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::debug;

use super::{FlexLine, LayoutState, MeasureKey, Measurement};
use crate::chapter5::{FlexConfig, FlexWrap};
use crate::chapter6::{FlexItem, collect_flex_items};
use crate::chapter7::{Size, Uv};
use crate::error::FlexError;

/// Line being filled while walking the ordered boxes.
#[derive(Copy, Clone, Debug)]
struct OpenLine {
    first: usize,
    count: usize,
    main: f32,
    cross: f32,
}

impl OpenLine {
    const fn starting_at(first: usize) -> Self {
        Self {
            first,
            count: 0,
            main: 0.0,
            cross: 0.0,
        }
    }

    /// Whether adding `extent` would push the line past `max_main`.
    ///
    /// An empty line accepts anything, so an oversized box still gets a line of its own.
    fn overflows(&self, extent: Uv, rules: &PackRules) -> bool {
        if self.count == 0 {
            return false;
        }
        let spacing = (self.count + rules.reserved_gaps) as f32 * rules.spacing_main;
        self.main + extent.u + spacing > rules.max_main
    }

    fn push(self, extent: Uv) -> Self {
        Self {
            count: self.count + 1,
            main: self.main + extent.u,
            cross: self.cross.max(extent.v),
            ..self
        }
    }

    fn close(self) -> Option<FlexLine> {
        (self.count > 0).then(|| {
            FlexLine::new(
                self.first,
                self.first + self.count - 1,
                self.main,
                self.cross,
            )
        })
    }
}

/// Constants for one packing walk.
#[derive(Copy, Clone, Debug)]
struct PackRules {
    max_main: f32,
    spacing_main: f32,
    reserved_gaps: usize,
    wraps: bool,
}

/// Pack measured extents into lines, in packing (not visual) order.
fn pack_lines(extents: &[Uv], rules: &PackRules) -> Vec<FlexLine> {
    let (mut lines, open) = extents.iter().copied().enumerate().fold(
        (Vec::new(), OpenLine::starting_at(0)),
        |(mut lines, open), (position, extent)| {
            let open = if rules.wraps && open.overflows(extent, rules) {
                if let Some(line) = open.close() {
                    debug!(
                        target: "flexbox::measure",
                        "[LINE-BUILD] close line items=[{}..={}] main={:.3} cross={:.3}",
                        line.first(),
                        line.last(),
                        line.main_extent(),
                        line.cross_extent()
                    );
                    lines.push(line);
                }
                OpenLine::starting_at(position)
            } else {
                open
            };
            (lines, open.push(extent))
        },
    );
    if let Some(line) = open.close() {
        lines.push(line);
    }
    lines
}

/// Size of the packed lines including spacing, in main/cross terms.
fn desired_extent(lines: &[FlexLine], spacing: Uv, reserved_gaps: usize) -> Uv {
    if lines.is_empty() {
        return Uv::ZERO;
    }
    let main = lines
        .iter()
        .map(|line| {
            let gaps = line.len() - 1 + reserved_gaps;
            line.main_extent() + gaps as f32 * spacing.u
        })
        .fold(0.0f32, f32::max);
    let cross = lines.iter().map(FlexLine::cross_extent).sum::<f32>()
        + (lines.len() - 1) as f32 * spacing.v;
    Uv::new(main, cross)
}

/// Measure every visible box against `available` and pack them into lines.
///
/// Each box is measured against the full available size, however many boxes end up sharing
/// its line. Without wrapping all boxes land on a single line regardless of overflow.
///
/// # Errors
/// Returns [`FlexError::InvalidSpacing`] when the configured spacing is unusable; no box is
/// measured in that case.
pub fn measure<B: FlexItem>(
    config: &FlexConfig,
    available: Size,
    items: &mut [B],
) -> Result<Measurement, FlexError> {
    config.validate()?;
    let is_column = config.direction.is_column();
    let spacing = Uv::from_spacing(config.column_spacing, config.row_spacing, is_column);
    let rules = PackRules {
        max_main: Uv::from_size(available, is_column).u,
        spacing_main: spacing.u,
        reserved_gaps: config.justify_content.reserved_gaps(),
        wraps: config.wrap.wraps(),
    };

    let order = collect_flex_items(items);
    let mut extents: Vec<Uv> = Vec::with_capacity(order.len());
    for &index in &order {
        if let Some(item) = items.get_mut(index) {
            item.measure(available);
            extents.push(Uv::from_size(item.desired_size(), is_column));
        }
    }

    let mut lines = pack_lines(&extents, &rules);
    let desired = desired_extent(&lines, spacing, rules.reserved_gaps).to_size(is_column);
    if matches!(config.wrap, FlexWrap::WrapReverse) {
        lines.reverse();
    }
    debug!(
        target: "flexbox::measure",
        "[LINE-BUILD] direction={:?} wrap={:?} items={} lines={} available=({:.3}, {:.3}) desired=({:.3}, {:.3})",
        config.direction,
        config.wrap,
        order.len(),
        lines.len(),
        available.width,
        available.height,
        desired.width,
        desired.height
    );

    Ok(Measurement {
        state: LayoutState {
            order,
            lines,
            item_count: items.len(),
            key: MeasureKey::of(config),
        },
        desired,
    })
}
