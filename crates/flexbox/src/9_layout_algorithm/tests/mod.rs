//! Tests for the measure and arrange passes.

use super::*;
use crate::chapter7::{Point, Rect, Size};
use crate::chapter8::{AlignContent, AlignItems};
use crate::error::{AxisKind, FlexError};

mod align_content_tests;

/// Box with a fixed intrinsic size that records what the layout did to it.
#[derive(Clone, Debug, PartialEq)]
pub struct TestBox {
    pub intrinsic: Size,
    pub desired: Size,
    pub visible: bool,
    pub order: i32,
    pub align_self: Option<AlignItems>,
    /// Every available size this box was measured against.
    pub measured_with: Vec<Size>,
    pub rect: Option<Rect>,
}

impl FlexItem for TestBox {
    fn measure(&mut self, available: Size) {
        self.measured_with.push(available);
        self.desired = self.intrinsic;
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn align_self(&self) -> Option<AlignItems> {
        self.align_self
    }
}

/// Helper to create a visible box of the given intrinsic size.
#[inline]
pub fn test_box(width: f32, height: f32) -> TestBox {
    TestBox {
        intrinsic: Size::new(width, height),
        desired: Size::ZERO,
        visible: true,
        order: 0,
        align_self: None,
        measured_with: Vec::new(),
        rect: None,
    }
}

/// Helper to create one box per `(width, height)` pair.
#[inline]
pub fn boxes(sizes: &[(f32, f32)]) -> Vec<TestBox> {
    sizes
        .iter()
        .map(|&(width, height)| test_box(width, height))
        .collect()
}

/// Row layout packing everything against start on both axes.
#[inline]
pub fn start_config(wrap: FlexWrap) -> FlexConfig {
    FlexConfig {
        direction: FlexDirection::Row,
        wrap,
        justify_content: JustifyContent::FlexStart,
        align_items: AlignItems::FlexStart,
        align_content: AlignContent::FlexStart,
        column_spacing: 0.0,
        row_spacing: 0.0,
    }
}

/// Measure and unwrap; the tests using this expect measurement to succeed.
#[inline]
pub fn measure_ok(config: &FlexConfig, available: Size, items: &mut [TestBox]) -> Measurement {
    measure(config, available, items).expect("measure should succeed")
}

/// Measure against `available`, then arrange into `final_size`.
#[inline]
pub fn layout(config: &FlexConfig, available: Size, final_size: Size, items: &mut [TestBox]) {
    let measurement = measure_ok(config, available, items);
    arrange(config, final_size, &measurement.state, items).expect("arrange should succeed");
}

/// Line summary `(first, last, main_extent, cross_extent)` for compact assertions.
#[inline]
pub fn line_summary(state: &LayoutState) -> Vec<(usize, usize, f32, f32)> {
    state
        .lines()
        .iter()
        .map(|line| (line.first(), line.last(), line.main_extent(), line.cross_extent()))
        .collect()
}

/// Assert a box received the expected rect, within tolerance.
#[inline]
pub fn assert_rect(item: &TestBox, x: f32, y: f32, width: f32, height: f32) {
    let rect = item.rect.unwrap_or(Rect::new(
        Point::new(f32::NAN, f32::NAN),
        Size::new(f32::NAN, f32::NAN),
    ));
    assert!((rect.origin.x - x).abs() < 0.001, "x: got {rect:?}, want {x}");
    assert!((rect.origin.y - y).abs() < 0.001, "y: got {rect:?}, want {y}");
    assert!((rect.size.width - width).abs() < 0.001, "width: got {rect:?}, want {width}");
    assert!((rect.size.height - height).abs() < 0.001, "height: got {rect:?}, want {height}");
}
