//! Tests for cross-axis distribution of lines.

use super::*;

/// Two lines, each holding one 50x30 box, in a 60x100 container.
fn two_lines(align_content: AlignContent, align_items: AlignItems, row_spacing: f32) -> Vec<TestBox> {
    let mut items = boxes(&[(50.0, 30.0), (50.0, 30.0)]);
    let config = FlexConfig {
        align_content,
        align_items,
        row_spacing,
        ..start_config(FlexWrap::Wrap)
    };
    layout(&config, Size::new(60.0, 100.0), Size::new(60.0, 100.0), &mut items);
    items
}

fn cross_offsets(items: &[TestBox]) -> Vec<f32> {
    items
        .iter()
        .map(|item| item.rect.map_or(f32::NAN, |rect| rect.origin.y))
        .collect()
}

fn assert_offsets(got: &[f32], expected: &[f32]) {
    assert_eq!(got.len(), expected.len());
    for (got_offset, expected_offset) in got.iter().zip(expected) {
        assert!(
            (got_offset - expected_offset).abs() < 0.001,
            "offsets {got:?} != {expected:?}"
        );
    }
}

#[test]
/// # Panics
/// Panics if packed line placement ignores the configured cross spacing.
fn packing_modes() {
    let start = two_lines(AlignContent::FlexStart, AlignItems::FlexStart, 10.0);
    assert_offsets(&cross_offsets(&start), &[0.0, 40.0]);
    let end = two_lines(AlignContent::FlexEnd, AlignItems::FlexStart, 0.0);
    assert_offsets(&cross_offsets(&end), &[40.0, 70.0]);
    let center = two_lines(AlignContent::Center, AlignItems::FlexStart, 0.0);
    assert_offsets(&cross_offsets(&center), &[20.0, 50.0]);
}

#[test]
/// # Panics
/// Panics if the spreading modes do not split the free cross space as expected.
fn spreading_modes() {
    let between = two_lines(AlignContent::SpaceBetween, AlignItems::FlexStart, 0.0);
    assert_offsets(&cross_offsets(&between), &[0.0, 70.0]);
    // gap (100 - 60) / 2 = 20, half a gap before the first line
    let around = two_lines(AlignContent::SpaceAround, AlignItems::FlexStart, 0.0);
    assert_offsets(&cross_offsets(&around), &[10.0, 60.0]);
    let gap = 40.0 / 3.0;
    let evenly = two_lines(AlignContent::SpaceEvenly, AlignItems::FlexStart, 0.0);
    assert_offsets(&cross_offsets(&evenly), &[gap, gap + 30.0 + gap]);
}

#[test]
/// Two 30px lines stretched into 100px scale by 100/60, so each line becomes ~50px.
///
/// # Panics
/// Panics if stretched lines do not scale, or stretched boxes do not fill their line.
fn stretch_scales_lines_to_fill() {
    let items = two_lines(AlignContent::Stretch, AlignItems::Stretch, 0.0);
    let line = 30.0 * (100.0 / 60.0);
    let [first, second] = items.as_slice() else {
        panic!("expected two boxes");
    };
    assert_rect(first, 0.0, 0.0, 50.0, line);
    assert_rect(second, 0.0, line, 50.0, line);
}

#[test]
/// # Panics
/// Panics if stretched lines do not keep boxes at their measured size under flex-start.
fn stretch_keeps_unstretched_items_at_line_start() {
    let items = two_lines(AlignContent::Stretch, AlignItems::FlexStart, 10.0);
    // scale (100 - 10) / 60 = 1.5 → lines of 45 separated by 10
    let [first, second] = items.as_slice() else {
        panic!("expected two boxes");
    };
    assert_rect(first, 0.0, 0.0, 50.0, 30.0);
    assert_rect(second, 0.0, 55.0, 50.0, 30.0);
}

#[test]
/// # Panics
/// Panics if wrap-reverse does not place the last packed line first along the cross axis.
fn wrap_reverse_stacks_last_line_first() {
    let mut items = boxes(&[(50.0, 10.0), (50.0, 10.0), (50.0, 10.0)]);
    layout(
        &start_config(FlexWrap::WrapReverse),
        Size::new(120.0, 100.0),
        Size::new(120.0, 20.0),
        &mut items,
    );
    let [first, second, third] = items.as_slice() else {
        panic!("expected three boxes");
    };
    assert_rect(third, 0.0, 0.0, 50.0, 10.0);
    assert_rect(first, 0.0, 10.0, 50.0, 10.0);
    assert_rect(second, 50.0, 10.0, 50.0, 10.0);
}

#[test]
/// # Panics
/// Panics if space-between over a single line is not reported as a configuration error.
fn space_between_single_line_is_rejected() {
    let mut items = boxes(&[(50.0, 10.0), (50.0, 10.0)]);
    let config = FlexConfig {
        align_content: AlignContent::SpaceBetween,
        ..start_config(FlexWrap::Wrap)
    };
    let measurement = measure_ok(&config, Size::new(200.0, 100.0), &mut items);
    let result = arrange(&config, Size::new(200.0, 100.0), &measurement.state, &mut items);
    assert!(matches!(
        result,
        Err(FlexError::DegenerateDistribution {
            policy: "space-between",
            axis: AxisKind::Cross,
            ..
        })
    ));
    assert!(items.iter().all(|item| item.rect.is_none()));
}
