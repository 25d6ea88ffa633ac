//! Property tests for navigation invariants.
//!
//! Uses proptest over randomly shaped trees to verify:
//! 1. Resolution — every valid chain resolves to the children of its last node
//! 2. Round trip — activate(expandable) then back() restores the path
//! 3. Back at root is idempotent
//! 4. Escape equals back below the root, and closes at the root
//! 5. Leaf activation never changes the path

use proptest::prelude::*;
use proptest::sample::Index;
use menudrawer_core::{Effect, MenuNode, MenuTree, NavigationController, NavigationPath};

// ── Strategies (proptest) ────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Shape(Vec<Shape>);

fn arb_shapes() -> impl Strategy<Value = Vec<Shape>> {
    let leaf = Just(Shape(Vec::new()));
    let node = leaf.prop_recursive(4, 64, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Shape)
    });
    prop::collection::vec(node, 1..5)
}

/// Number nodes in pre-order so ids are unique.
fn build(shapes: &[Shape], next: &mut u32) -> Vec<MenuNode> {
    let mut nodes = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let id = *next;
        *next += 1;
        let children = build(&shape.0, next);
        nodes.push(MenuNode::leaf(id, format!("node-{id}"), "").with_children(children));
    }
    nodes
}

fn arb_tree() -> impl Strategy<Value = MenuTree> {
    arb_shapes().prop_map(|shapes| {
        let mut next = 1;
        MenuTree::new(build(&shapes, &mut next)).expect("pre-order ids are unique")
    })
}

fn expandable_ids(tree: &MenuTree) -> Vec<u32> {
    tree.iter()
        .filter(|(_, n)| n.is_expandable())
        .map(|(_, n)| n.id)
        .collect()
}

fn leaf_ids(tree: &MenuTree) -> Vec<u32> {
    tree.iter().filter(|(_, n)| n.is_leaf()).map(|(_, n)| n.id).collect()
}

/// Controller drilled down to the expandable node picked by `pick`
/// (root when the tree has no expandable nodes).
fn drilled(tree: &MenuTree, pick: Index) -> NavigationController {
    let mut nav = NavigationController::new(tree.clone());
    let candidates = expandable_ids(tree);
    if !candidates.is_empty() {
        let target = candidates[pick.index(candidates.len())];
        for id in tree.chain_to(target).unwrap() {
            nav.activate(id);
        }
    }
    nav
}

fn ids(items: &[MenuNode]) -> Vec<u32> {
    items.iter().map(|n| n.id).collect()
}

// ── 1. Resolution ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn resolve_returns_children_of_chain_end(tree in arb_tree()) {
        let nav = NavigationController::new(tree.clone());
        prop_assert_eq!(ids(nav.resolve(&NavigationPath::new())), ids(tree.root()));

        for id in expandable_ids(&tree) {
            let chain = tree.chain_to(id).unwrap();
            let expected = ids(&tree.find(id).unwrap().children);
            prop_assert_eq!(ids(nav.resolve(&NavigationPath::from_ids(chain))), expected);
        }
    }

    #[test]
    fn drilling_a_chain_tracks_the_path(tree in arb_tree(), pick in any::<Index>()) {
        let nav = drilled(&tree, pick);
        let expected = match nav.path().last() {
            Some(last) => ids(&tree.find(last).unwrap().children),
            None => ids(tree.root()),
        };
        prop_assert_eq!(ids(nav.visible_items()), expected);
        prop_assert_eq!(nav.breadcrumb().len(), nav.level());
    }
}

// ── 2. Round trip ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn activate_then_back_restores_path(
        tree in arb_tree(),
        start in any::<Index>(),
        target in any::<Index>(),
    ) {
        let candidates = expandable_ids(&tree);
        prop_assume!(!candidates.is_empty());

        let mut nav = drilled(&tree, start);
        let before = nav.path().clone();
        let id = candidates[target.index(candidates.len())];

        prop_assert_ne!(nav.activate(id), Effect::None);
        prop_assert_eq!(nav.level(), before.len() + 1);
        nav.back();
        prop_assert_eq!(nav.path(), &before);
    }
}

// ── 3. Back at root ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn back_at_root_is_idempotent(tree in arb_tree(), repeats in 1usize..5) {
        let mut nav = NavigationController::new(tree);
        for _ in 0..repeats {
            prop_assert_eq!(nav.back(), Effect::None);
            prop_assert!(nav.path().is_empty());
        }
    }
}

// ── 4. Escape ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn escape_matches_back_below_root(tree in arb_tree(), pick in any::<Index>()) {
        let mut via_escape = drilled(&tree, pick);
        let mut via_back = via_escape.clone();

        if via_escape.is_submenu() {
            let escape_effect = via_escape.on_escape();
            let back_effect = via_back.back();
            prop_assert_eq!(escape_effect, back_effect);
            prop_assert_eq!(via_escape.path(), via_back.path());
        } else {
            prop_assert_eq!(via_escape.on_escape(), Effect::Close);
            prop_assert!(via_escape.path().is_empty());
        }
    }

    #[test]
    fn escape_eventually_closes(tree in arb_tree(), pick in any::<Index>()) {
        let mut nav = drilled(&tree, pick);
        let depth = nav.level();
        for _ in 0..depth {
            prop_assert_ne!(nav.on_escape(), Effect::Close);
        }
        prop_assert_eq!(nav.on_escape(), Effect::Close);
    }
}

// ── 5. Leaf activation ───────────────────────────────────────────────

proptest! {
    #[test]
    fn leaf_activation_never_changes_path(
        tree in arb_tree(),
        pick in any::<Index>(),
        leaf in any::<Index>(),
    ) {
        let leaves = leaf_ids(&tree);
        let mut nav = drilled(&tree, pick);
        let before = nav.path().clone();
        let id = leaves[leaf.index(leaves.len())];

        prop_assert_eq!(nav.activate(id), Effect::None);
        prop_assert_eq!(nav.path(), &before);
    }
}
