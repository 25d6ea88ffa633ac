//! Built-in menu used when no menu file is configured.

use menudrawer_core::{MenuNode, MenuTree};

pub fn items() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf(1, "Home", "⌂").with_subtitle("Back to the start page"),
        MenuNode::leaf(2, "Account", "☺")
            .with_subtitle("Profile, security and billing")
            .with_children(vec![
                MenuNode::leaf(21, "Profile", "✎").with_subtitle("Name, photo and bio"),
                MenuNode::leaf(22, "Security", "⚿")
                    .with_subtitle("Password and sign-in")
                    .with_children(vec![
                        MenuNode::leaf(221, "Change password", "•"),
                        MenuNode::leaf(222, "Two-factor authentication", "•")
                            .with_subtitle("Authenticator app or SMS"),
                        MenuNode::leaf(223, "Active sessions", "•"),
                    ]),
                MenuNode::leaf(23, "Billing", "$").with_subtitle("Plans and invoices"),
            ]),
        MenuNode::leaf(3, "Orders", "▤")
            .with_subtitle("Track and manage purchases")
            .with_children(vec![
                MenuNode::leaf(31, "Open orders", "○"),
                MenuNode::leaf(32, "Order history", "◷"),
                MenuNode::leaf(33, "Returns", "↺").with_subtitle("Start or track a return"),
            ]),
        MenuNode::leaf(4, "Settings", "⚙")
            .with_subtitle("Appearance and notifications")
            .with_children(vec![
                MenuNode::leaf(41, "Appearance", "◐").with_children(vec![
                    MenuNode::leaf(411, "Theme", "•").with_subtitle("Light or dark"),
                    MenuNode::leaf(412, "Text size", "•"),
                ]),
                MenuNode::leaf(42, "Notifications", "♪").with_children(vec![
                    MenuNode::leaf(421, "Email", "•"),
                    MenuNode::leaf(422, "Push", "•"),
                ]),
                MenuNode::leaf(43, "Language", "⚑").with_subtitle("English"),
            ]),
        MenuNode::leaf(5, "Help", "?").with_subtitle("FAQ and contact"),
    ]
}

/// The built-in tree.
///
/// # Panics
///
/// Panics if [`items`] is edited into an invalid tree; `test_sample_ids_are_unique`
/// guards against that.
pub fn tree() -> MenuTree {
    MenuTree::new(items()).expect("built-in menu has unique ids and a root level")
}
