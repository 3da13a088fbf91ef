//! Flex Items: the box abstraction and participating-item collection
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use crate::chapter7::{Rect, Size, sort_items_by_order_stable};
use crate::chapter8::AlignItems;

/// A box laid out by the flex algorithm.
///
/// The host owns the box; the layout only asks it to measure, reads back its desired size and
/// finally hands it a rect. A box must not take part in two layouts at the same time.
pub trait FlexItem {
    /// Measure against `available` and remember the result for [`FlexItem::desired_size`].
    fn measure(&mut self, available: Size);

    /// Size reported by the last call to [`FlexItem::measure`].
    fn desired_size(&self) -> Size;

    /// Receive the final position and size computed by the arrange pass.
    fn arrange(&mut self, rect: Rect);

    /// Hidden boxes are neither measured, placed in a line, nor arranged.
    fn is_visible(&self) -> bool {
        true
    }

    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
    fn order(&self) -> i32 {
        0
    }

    /// Per-box override of the container's `align-items`.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
    fn align_self(&self) -> Option<AlignItems> {
        None
    }
}

impl<T: FlexItem + ?Sized> FlexItem for &mut T {
    fn measure(&mut self, available: Size) {
        (**self).measure(available);
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect);
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn order(&self) -> i32 {
        (**self).order()
    }

    fn align_self(&self) -> Option<AlignItems> {
        (**self).align_self()
    }
}

/// Returns true when the box participates in flex layout.
#[inline]
pub fn is_flex_item<B: FlexItem + ?Sized>(item: &B) -> bool {
    item.is_visible()
}

/// Collect the indices of participating boxes in layout order.
///
/// Boxes are stably sorted by `order` (ties keep source order), then hidden ones are dropped.
/// The result is a pure function of the boxes' current `order` and visibility.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
pub fn collect_flex_items<B: FlexItem>(items: &[B]) -> Vec<usize> {
    let keyed: Vec<(usize, i32)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (index, item.order()))
        .collect();
    sort_items_by_order_stable(&keyed)
        .into_iter()
        .filter(|&index| items.get(index).is_some_and(is_flex_item))
        .collect()
}
