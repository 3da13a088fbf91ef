//! Axis mapping and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

/// Physical width/height pair in px.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Physical x/y position in px, relative to the container's content box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Final position and size handed to a box by the arrange pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
}

/// A direction-agnostic pair: `u` runs along the main axis, `v` along the cross axis.
///
/// With a row flow `u` maps to width/x and `v` to height/y; a column flow swaps them.
/// Inputs are not validated; NaN or negative components pass straight through.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Uv {
    pub u: f32,
    pub v: f32,
}

impl Uv {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    /// Map a physical size onto the main/cross axes.
    #[inline]
    pub const fn from_size(size: Size, is_column: bool) -> Self {
        if is_column {
            Self::new(size.height, size.width)
        } else {
            Self::new(size.width, size.height)
        }
    }

    /// Map a `(column_spacing, row_spacing)` pair onto the main/cross axes.
    ///
    /// Column spacing separates boxes horizontally, so it behaves like a width.
    #[inline]
    pub const fn from_spacing(column_spacing: f32, row_spacing: f32, is_column: bool) -> Self {
        Self::from_size(Size::new(column_spacing, row_spacing), is_column)
    }

    #[inline]
    pub const fn to_size(self, is_column: bool) -> Size {
        if is_column {
            Size::new(self.v, self.u)
        } else {
            Size::new(self.u, self.v)
        }
    }

    #[inline]
    pub const fn to_point(self, is_column: bool) -> Point {
        if is_column {
            Point::new(self.v, self.u)
        } else {
            Point::new(self.u, self.v)
        }
    }
}

/// Compute a stable ordering key for a flex item.
/// Returns (order, `original_index`) so a stable sort by this key respects source order ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

type OrderKey = (i32, usize);

/// Stable sort of `(index, order)` pairs by order, preserving input order for ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_items_by_order_stable(items: &[(usize, i32)]) -> Vec<usize> {
    let mut with_key: Vec<(OrderKey, usize)> = items
        .iter()
        .enumerate()
        .map(|(original_index, &(index, order))| (order_key(order, original_index), index))
        .collect();
    with_key.sort_by(|key_a, key_b| key_a.0.cmp(&key_b.0));
    with_key.into_iter().map(|(_, index)| index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if a row flow does not keep `u` on width/x and `v` on height/y.
    fn row_maps_u_to_width() {
        let uv = Uv::from_size(Size::new(30.0, 10.0), false);
        assert_eq!(uv, Uv::new(30.0, 10.0));
        assert_eq!(uv.to_size(false), Size::new(30.0, 10.0));
        assert_eq!(uv.to_point(false), Point::new(30.0, 10.0));
    }

    #[test]
    /// # Panics
    /// Panics if a column flow does not swap the axes both ways.
    fn column_swaps_axes() {
        let uv = Uv::from_size(Size::new(30.0, 10.0), true);
        assert_eq!(uv, Uv::new(10.0, 30.0));
        assert_eq!(uv.to_size(true), Size::new(30.0, 10.0));
        assert_eq!(Uv::new(5.0, 7.0).to_point(true), Point::new(7.0, 5.0));
    }

    #[test]
    /// # Panics
    /// Panics if column spacing is not treated as the horizontal component.
    fn spacing_follows_orientation() {
        assert_eq!(Uv::from_spacing(4.0, 8.0, false), Uv::new(4.0, 8.0));
        assert_eq!(Uv::from_spacing(4.0, 8.0, true), Uv::new(8.0, 4.0));
    }

    #[test]
    /// # Panics
    /// Panics if stable order sorting does not preserve input order for ties.
    fn stable_order_sorting() {
        let items = vec![(10, 1i32), (11, 0i32), (12, 1i32), (13, -1i32), (14, 0i32)];
        let sorted = sort_items_by_order_stable(&items);
        // order=-1 first, then order=0 in input order, then order=1 in input order
        assert_eq!(sorted, vec![13, 11, 14, 10, 12]);
    }
}
