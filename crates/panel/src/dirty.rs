//! Invalidation flags for a panel.

/// Which passes a panel must re-run. Flags combine with [`DirtyKind::or`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirtyKind(u8);

impl DirtyKind {
    /// Nothing to redo.
    pub const NONE: Self = Self(0);
    /// Position and size of the children may change: arrange again.
    pub const ARRANGE: Self = Self(1 << 0);
    /// Line structure may change: measure again (which also requires arranging again).
    pub const MEASURE: Self = Self(1 << 1);

    /// Combine two dirty kinds.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if all flags in `other` are present.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Drop the flags in `other`.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn is_clean(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if combining, containment, or removal of flags misbehaves.
    fn flags_combine_and_clear() {
        let both = DirtyKind::MEASURE.or(DirtyKind::ARRANGE);
        assert!(both.contains(DirtyKind::MEASURE));
        assert!(both.contains(DirtyKind::ARRANGE));
        assert!(!DirtyKind::ARRANGE.contains(DirtyKind::MEASURE));
        assert_eq!(both.without(DirtyKind::MEASURE), DirtyKind::ARRANGE);
        assert!(both.without(both).is_clean());
        assert!(DirtyKind::NONE.contains(DirtyKind::NONE));
    }
}
