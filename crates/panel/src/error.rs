//! Usage errors raised at the host boundary.

use thiserror::Error;

use crate::leaf::NodeKey;
use crate::ownership::PanelId;

/// Errors in how a host wires boxes to panels.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    /// The box already belongs to another panel and must be detached first.
    #[error("{node} is owned by {owner}, cannot attach it to {requested}")]
    AlreadyOwned {
        node: NodeKey,
        owner: PanelId,
        requested: PanelId,
    },
    /// The panel already lists this box as a child.
    #[error("{node} is already a child of {panel}")]
    DuplicateChild { node: NodeKey, panel: PanelId },
    /// The panel has no child with this key.
    #[error("{node} is not a child of {panel}")]
    UnknownChild { node: NodeKey, panel: PanelId },
}
