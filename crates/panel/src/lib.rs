//! Host side of the flex layout: concrete boxes, single-owner attachment and invalidation.
//!
//! The `flexbox` crate is a pure function of its inputs and never decides when to run. A
//! [`FlexPanel`] owns a set of [`LeafBox`] children, tracks which configuration changes require a
//! new measurement and which only a new arrangement, and re-runs the two passes on demand.
//! [`OwnershipRegistry`] keeps the "box → owning panel" relation so a box is never laid out by two
//! panels at once.

mod config;
mod dirty;
mod error;
mod leaf;
mod ownership;
mod panel;

pub use config::{apply_declarations, load_config};
pub use dirty::DirtyKind;
pub use error::PanelError;
pub use leaf::{LeafBox, NodeKey};
pub use ownership::{OwnershipRegistry, PanelId};
pub use panel::FlexPanel;
