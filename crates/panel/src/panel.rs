//! A flex container that re-runs measure/arrange only when its inputs changed.

use anyhow::{Context as _, Result};
use flexbox::{
    AlignContent, AlignItems, FlexConfig, FlexDirection, FlexError, FlexItem as _, FlexWrap,
    JustifyContent, LayoutState, Size, arrange, measure,
};
use log::debug;

use crate::dirty::DirtyKind;
use crate::error::PanelError;
use crate::leaf::{LeafBox, NodeKey};
use crate::ownership::{OwnershipRegistry, PanelId};

/// Flex container over a list of [`LeafBox`] children.
///
/// Configuration setters record what they invalidate: direction, wrap, justify-content, spacing
/// and any change to the children's visibility, order or size require a new measurement;
/// align-items, align-content and align-self only require a new arrangement.
#[derive(Debug)]
pub struct FlexPanel {
    id: PanelId,
    config: FlexConfig,
    children: Vec<LeafBox>,
    state: Option<LayoutState>,
    desired: Size,
    last_available: Option<Size>,
    last_final: Option<Size>,
    dirty: DirtyKind,
}

/// Dirty kind caused by replacing `old` with `new`.
fn config_change(old: &FlexConfig, new: &FlexConfig) -> DirtyKind {
    let measure_changed = old.direction != new.direction
        || old.wrap != new.wrap
        || old.justify_content != new.justify_content
        || old.column_spacing.to_bits() != new.column_spacing.to_bits()
        || old.row_spacing.to_bits() != new.row_spacing.to_bits();
    if measure_changed {
        DirtyKind::MEASURE.or(DirtyKind::ARRANGE)
    } else if old.align_items != new.align_items || old.align_content != new.align_content {
        DirtyKind::ARRANGE
    } else {
        DirtyKind::NONE
    }
}

impl FlexPanel {
    pub fn new(id: PanelId, config: FlexConfig) -> Self {
        Self {
            id,
            config,
            children: Vec::new(),
            state: None,
            desired: Size::ZERO,
            last_available: None,
            last_final: None,
            dirty: DirtyKind::MEASURE.or(DirtyKind::ARRANGE),
        }
    }

    pub const fn id(&self) -> PanelId {
        self.id
    }

    pub const fn config(&self) -> &FlexConfig {
        &self.config
    }

    pub fn children(&self) -> &[LeafBox] {
        &self.children
    }

    pub fn child(&self, node: NodeKey) -> Option<&LeafBox> {
        self.children.iter().find(|child| child.key() == node)
    }

    /// Size reported by the last measurement.
    pub const fn desired_size(&self) -> Size {
        self.desired
    }

    pub const fn dirty_kind(&self) -> DirtyKind {
        self.dirty
    }

    pub const fn needs_measure(&self) -> bool {
        self.dirty.contains(DirtyKind::MEASURE)
    }

    pub const fn needs_arrange(&self) -> bool {
        self.dirty.contains(DirtyKind::ARRANGE)
    }

    fn invalidate(&mut self, kind: DirtyKind) {
        if !kind.is_clean() {
            debug!(target: "flex_panel::panel", "{} invalidated: {kind:?}", self.id);
        }
        self.dirty = self.dirty.or(kind);
    }

    fn child_mut(&mut self, node: NodeKey) -> Result<&mut LeafBox, PanelError> {
        let panel = self.id;
        self.children
            .iter_mut()
            .find(|child| child.key() == node)
            .ok_or(PanelError::UnknownChild { node, panel })
    }

    /// Append `child`, recording this panel as its owner.
    ///
    /// # Errors
    /// Fails with [`PanelError::AlreadyOwned`] when another panel owns the box and with
    /// [`PanelError::DuplicateChild`] when this panel already holds it.
    pub fn add_child(&mut self, registry: &mut OwnershipRegistry, child: LeafBox) -> Result<()> {
        let node = child.key();
        if self.child(node).is_some() {
            return Err(PanelError::DuplicateChild {
                node,
                panel: self.id,
            })
            .context("adding child");
        }
        registry
            .attach(node, self.id)
            .with_context(|| format!("adding {node} to {}", self.id))?;
        self.children.push(child);
        self.invalidate(DirtyKind::MEASURE.or(DirtyKind::ARRANGE));
        Ok(())
    }

    /// Remove and return the child `node`, releasing its owner record.
    ///
    /// # Errors
    /// Fails with [`PanelError::UnknownChild`] when the panel has no such child.
    pub fn remove_child(&mut self, registry: &mut OwnershipRegistry, node: NodeKey) -> Result<LeafBox> {
        let position = self
            .children
            .iter()
            .position(|child| child.key() == node)
            .ok_or(PanelError::UnknownChild {
                node,
                panel: self.id,
            })
            .context("removing child")?;
        let child = self.children.remove(position);
        registry.detach(node);
        self.invalidate(DirtyKind::MEASURE.or(DirtyKind::ARRANGE));
        Ok(child)
    }

    /// Replace the whole configuration, invalidating only what the change affects.
    pub fn set_config(&mut self, config: FlexConfig) {
        let kind = config_change(&self.config, &config);
        self.config = config;
        self.invalidate(kind);
    }

    pub fn set_direction(&mut self, direction: FlexDirection) {
        self.set_config(FlexConfig {
            direction,
            ..self.config
        });
    }

    pub fn set_wrap(&mut self, wrap: FlexWrap) {
        self.set_config(FlexConfig { wrap, ..self.config });
    }

    pub fn set_justify_content(&mut self, justify_content: JustifyContent) {
        self.set_config(FlexConfig {
            justify_content,
            ..self.config
        });
    }

    pub fn set_spacing(&mut self, column_spacing: f32, row_spacing: f32) {
        self.set_config(FlexConfig {
            column_spacing,
            row_spacing,
            ..self.config
        });
    }

    pub fn set_align_items(&mut self, align_items: AlignItems) {
        self.set_config(FlexConfig {
            align_items,
            ..self.config
        });
    }

    pub fn set_align_content(&mut self, align_content: AlignContent) {
        self.set_config(FlexConfig {
            align_content,
            ..self.config
        });
    }

    /// # Errors
    /// Fails with [`PanelError::UnknownChild`] when the panel has no such child.
    pub fn set_child_visible(&mut self, node: NodeKey, visible: bool) -> Result<()> {
        let child = self.child_mut(node)?;
        if child.is_visible() != visible {
            child.set_visible(visible);
            self.invalidate(DirtyKind::MEASURE.or(DirtyKind::ARRANGE));
        }
        Ok(())
    }

    /// Changing `order` can move a box to another line, so it invalidates the measurement.
    ///
    /// # Errors
    /// Fails with [`PanelError::UnknownChild`] when the panel has no such child.
    pub fn set_child_order(&mut self, node: NodeKey, order: i32) -> Result<()> {
        let child = self.child_mut(node)?;
        if child.order() != order {
            child.set_order(order);
            self.invalidate(DirtyKind::MEASURE.or(DirtyKind::ARRANGE));
        }
        Ok(())
    }

    /// # Errors
    /// Fails with [`PanelError::UnknownChild`] when the panel has no such child.
    pub fn set_child_intrinsic_size(&mut self, node: NodeKey, size: Size) -> Result<()> {
        let child = self.child_mut(node)?;
        if child.intrinsic_size() != size {
            child.set_intrinsic_size(size);
            self.invalidate(DirtyKind::MEASURE.or(DirtyKind::ARRANGE));
        }
        Ok(())
    }

    /// # Errors
    /// Fails with [`PanelError::UnknownChild`] when the panel has no such child.
    pub fn set_child_align_self(&mut self, node: NodeKey, align: Option<AlignItems>) -> Result<()> {
        let child = self.child_mut(node)?;
        if child.align_self() != align {
            child.set_align_self(align);
            self.invalidate(DirtyKind::ARRANGE);
        }
        Ok(())
    }

    /// Measure the children against `available`, reusing the last result when nothing changed.
    ///
    /// # Errors
    /// Propagates [`FlexError`] from the measure pass; the previous layout state is dropped so a
    /// following [`FlexPanel::arrange`] reports [`FlexError::NotMeasured`].
    pub fn measure(&mut self, available: Size) -> Result<Size> {
        if !self.needs_measure() && self.state.is_some() && self.last_available == Some(available)
        {
            debug!(target: "flex_panel::panel", "{} measure skipped: clean", self.id);
            return Ok(self.desired);
        }
        self.state = None;
        let measurement = measure(&self.config, available, &mut self.children)
            .with_context(|| format!("measuring {}", self.id))?;
        debug!(
            target: "flex_panel::panel",
            "{} measured {} lines, desired=({:.3}, {:.3})",
            self.id,
            measurement.state.lines().len(),
            measurement.desired.width,
            measurement.desired.height
        );
        self.state = Some(measurement.state);
        self.desired = measurement.desired;
        self.last_available = Some(available);
        self.last_final = None;
        self.dirty = self.dirty.without(DirtyKind::MEASURE).or(DirtyKind::ARRANGE);
        Ok(self.desired)
    }

    /// Arrange the children into `final_size` using the lines from the last measurement.
    ///
    /// # Errors
    /// - [`FlexError::NotMeasured`] when the panel has never been measured successfully.
    /// - [`FlexError::StaleLayout`] when something requiring a new measurement changed since.
    /// - Any [`FlexError`] from the arrange pass; no child is moved in that case.
    pub fn arrange(&mut self, final_size: Size) -> Result<Size> {
        let Some(state) = self.state.as_ref() else {
            return Err(FlexError::NotMeasured).with_context(|| format!("arranging {}", self.id));
        };
        if self.needs_measure() {
            return Err(FlexError::StaleLayout {
                reason: "panel invalidated its measurement".to_owned(),
            })
            .with_context(|| format!("arranging {}", self.id));
        }
        if !self.needs_arrange() && self.last_final == Some(final_size) {
            debug!(target: "flex_panel::panel", "{} arrange skipped: clean", self.id);
            return Ok(final_size);
        }
        let arranged = arrange(&self.config, final_size, state, &mut self.children)
            .with_context(|| format!("arranging {}", self.id))?;
        self.last_final = Some(final_size);
        self.dirty = self.dirty.without(DirtyKind::ARRANGE);
        Ok(arranged)
    }
}
