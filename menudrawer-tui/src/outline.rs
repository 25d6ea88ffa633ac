//! Plain-text outline of a menu tree, printed by `menudrawer check`.

use std::fmt::Write;

use menudrawer_core::MenuTree;

/// One line per node in pre-order: id, indentation by depth, `›` on
/// expandable nodes, icon, name and subtitle.
pub fn outline(tree: &MenuTree) -> String {
    let mut out = String::new();
    for (depth, node) in tree.iter() {
        let marker = if node.is_expandable() { "›" } else { " " };
        let subtitle = node
            .subtitle
            .as_deref()
            .map(|s| format!(" — {s}"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>6}  {}{} {} {}{}",
            node.id,
            "  ".repeat(depth),
            marker,
            node.icon,
            node.name,
            subtitle
        );
    }
    out
}

/// Node counts, e.g. `"12 items, 3 with submenus"`.
pub fn summary(tree: &MenuTree) -> String {
    let expandable = tree.iter().filter(|(_, n)| n.is_expandable()).count();
    format!("{} items, {} with submenus", tree.len(), expandable)
}
