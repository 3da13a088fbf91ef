//! Flexbox line packing and distribution.
//!
//! Two passes over a host-owned collection of boxes:
//! - [`measure`] asks every visible box for its desired size, packs the boxes greedily into
//!   lines along the main axis and reports the size the whole layout wants.
//! - [`arrange`] takes the [`LayoutState`] captured by `measure` and a final size, distributes the
//!   lines along the cross axis and the boxes of each line along the main axis, and hands every
//!   box its rect.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §5: Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6: Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7: Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §8: Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9: Flex Layout Algorithm (line collection and distribution)
#[path = "9_layout_algorithm/mod.rs"]
mod chapter9;

mod error;

pub use chapter5::{FlexConfig, FlexDirection, FlexWrap};
pub use chapter6::{FlexItem, collect_flex_items, is_flex_item};
pub use chapter7::{Point, Rect, Size, Uv, order_key, sort_items_by_order_stable};
pub use chapter8::cross_axis::{
    CrossPlacement, LineDistribution, LinesCross, align_content_params, align_item_cross,
};
pub use chapter8::main_axis::{LineMain, MainDistribution, justify_params};
pub use chapter8::{AlignContent, AlignItems, JustifyContent};
pub use chapter9::{FlexLine, LayoutState, Measurement, arrange, measure};
pub use error::{AxisKind, FlexError};
