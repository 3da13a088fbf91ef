#![allow(clippy::unwrap_used, reason = "integration tests fail loudly on setup errors")]

use flex_panel::{FlexPanel, LeafBox, NodeKey, OwnershipRegistry, PanelError, PanelId};
use flexbox::{FlexConfig, Size};

fn leaf(key: u64) -> LeafBox {
    LeafBox::new(NodeKey(key), Size::new(10.0, 10.0))
}

#[test]
fn box_cannot_join_two_panels() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut registry = OwnershipRegistry::new();
    let mut first = FlexPanel::new(PanelId(1), FlexConfig::default());
    let mut second = FlexPanel::new(PanelId(2), FlexConfig::default());
    first.add_child(&mut registry, leaf(7)).unwrap();

    let error = second.add_child(&mut registry, leaf(7)).unwrap_err();
    assert_eq!(
        error.downcast_ref::<PanelError>(),
        Some(&PanelError::AlreadyOwned {
            node: NodeKey(7),
            owner: PanelId(1),
            requested: PanelId(2),
        })
    );
    assert!(second.children().is_empty());
    assert_eq!(registry.owner(NodeKey(7)), Some(PanelId(1)));
}

#[test]
fn removed_box_can_move_to_another_panel() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut registry = OwnershipRegistry::new();
    let mut first = FlexPanel::new(PanelId(1), FlexConfig::default());
    let mut second = FlexPanel::new(PanelId(2), FlexConfig::default());
    first.add_child(&mut registry, leaf(7)).unwrap();
    first.measure(Size::new(50.0, 50.0)).unwrap();
    first.arrange(Size::new(50.0, 50.0)).unwrap();

    let moved = first.remove_child(&mut registry, NodeKey(7)).unwrap();
    assert!(first.needs_measure());
    assert_eq!(registry.owner(NodeKey(7)), None);

    second.add_child(&mut registry, moved).unwrap();
    assert_eq!(registry.owner(NodeKey(7)), Some(PanelId(2)));
    assert_eq!(second.children().len(), 1);
}

#[test]
fn duplicate_and_unknown_children_are_rejected() {
    let mut registry = OwnershipRegistry::new();
    let mut panel = FlexPanel::new(PanelId(3), FlexConfig::default());
    panel.add_child(&mut registry, leaf(1)).unwrap();

    let duplicate = panel.add_child(&mut registry, leaf(1)).unwrap_err();
    assert_eq!(
        duplicate.downcast_ref::<PanelError>(),
        Some(&PanelError::DuplicateChild {
            node: NodeKey(1),
            panel: PanelId(3),
        })
    );

    let unknown = panel.remove_child(&mut registry, NodeKey(2)).unwrap_err();
    assert_eq!(
        unknown.downcast_ref::<PanelError>(),
        Some(&PanelError::UnknownChild {
            node: NodeKey(2),
            panel: PanelId(3),
        })
    );
    assert_eq!(panel.children().len(), 1);
    assert_eq!(registry.len(), 1);
}
