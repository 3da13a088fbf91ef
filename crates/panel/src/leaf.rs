//! A leaf box with a fixed intrinsic size.

use core::fmt;

use flexbox::{AlignItems, FlexItem, Rect, Size};

/// Opaque identity of a box, stable across panels.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub u64);

impl fmt::Display for NodeKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "node#{}", self.0)
    }
}

/// Box whose content size is known up front.
///
/// It reports its intrinsic size whatever space it is offered, and remembers the rect it was last
/// arranged into. Hidden boxes keep whatever rect they had before they were hidden.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafBox {
    key: NodeKey,
    intrinsic: Size,
    desired: Size,
    visible: bool,
    order: i32,
    align_self: Option<AlignItems>,
    rect: Option<Rect>,
    measure_passes: u32,
}

impl LeafBox {
    pub const fn new(key: NodeKey, intrinsic: Size) -> Self {
        Self {
            key,
            intrinsic,
            desired: Size::ZERO,
            visible: true,
            order: 0,
            align_self: None,
            rect: None,
            measure_passes: 0,
        }
    }

    #[must_use]
    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub const fn with_align_self(mut self, align: AlignItems) -> Self {
        self.align_self = Some(align);
        self
    }

    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub const fn key(&self) -> NodeKey {
        self.key
    }

    pub const fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }

    /// Rect from the last arrange pass, `None` until the box is first arranged.
    pub const fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// How many times the box has been measured.
    pub const fn measure_passes(&self) -> u32 {
        self.measure_passes
    }

    pub(crate) const fn set_intrinsic_size(&mut self, intrinsic: Size) {
        self.intrinsic = intrinsic;
    }

    pub(crate) const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) const fn set_order(&mut self, order: i32) {
        self.order = order;
    }

    pub(crate) const fn set_align_self(&mut self, align: Option<AlignItems>) {
        self.align_self = align;
    }
}

impl FlexItem for LeafBox {
    fn measure(&mut self, _available: Size) {
        self.desired = self.intrinsic;
        self.measure_passes += 1;
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
