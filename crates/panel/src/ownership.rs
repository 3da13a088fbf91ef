//! The "box → owning panel" relation.

use core::fmt;
use std::collections::HashMap;

use log::warn;

use crate::error::PanelError;
use crate::leaf::NodeKey;

/// Identity of a panel instance.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u32);

impl fmt::Display for PanelId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "panel#{}", self.0)
    }
}

/// Records which panel each box belongs to; a box belongs to at most one panel.
#[derive(Clone, Debug, Default)]
pub struct OwnershipRegistry {
    owners: HashMap<NodeKey, PanelId>,
}

impl OwnershipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `panel` as the owner of `node`.
    ///
    /// Attaching a box to the panel that already owns it is a no-op.
    ///
    /// # Errors
    /// Returns [`PanelError::AlreadyOwned`] when another panel owns `node`; the existing
    /// relation is left unchanged.
    pub fn attach(&mut self, node: NodeKey, panel: PanelId) -> Result<(), PanelError> {
        match self.owners.get(&node) {
            Some(&owner) if owner != panel => {
                warn!(
                    target: "flex_panel::ownership",
                    "rejecting attach of {node} to {panel}: owned by {owner}"
                );
                Err(PanelError::AlreadyOwned {
                    node,
                    owner,
                    requested: panel,
                })
            }
            Some(_) => Ok(()),
            None => {
                self.owners.insert(node, panel);
                Ok(())
            }
        }
    }

    /// Forget the owner of `node`, returning it if there was one.
    pub fn detach(&mut self, node: NodeKey) -> Option<PanelId> {
        self.owners.remove(&node)
    }

    pub fn owner(&self, node: NodeKey) -> Option<PanelId> {
        self.owners.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
