//! Role-keyed navigation trees and the activity/expansion rules that drive
//! the sidebar. Pure data and functions, no signals.

use std::collections::HashMap;

use contracts::system::auth::RoleClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLeaf {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    Leaf(NavLeaf),
    Group {
        label: &'static str,
        icon: &'static str,
        children: Vec<NavLeaf>,
    },
}

const fn leaf(label: &'static str, href: &'static str, icon: &'static str) -> NavLeaf {
    NavLeaf { label, href, icon }
}

fn admin_navigation() -> Vec<NavNode> {
    vec![
        NavNode::Leaf(leaf("Dashboard", "/", "dashboard")),
        NavNode::Leaf(leaf("Client Announcements", "/admin/daily-updates", "bell")),
        NavNode::Leaf(leaf("Clients", "/clients", "users")),
        NavNode::Group {
            label: "Cargo",
            icon: "package",
            children: vec![
                leaf("Sea Cargo", "/cargos/sea", "ship"),
                leaf("Air Cargo", "/cargos/air", "plane"),
            ],
        },
        NavNode::Group {
            label: "Daily Updates",
            icon: "warehouse",
            children: vec![
                leaf("China Sea", "/goods/china/sea", "ship"),
                leaf("China Air", "/goods/china/air", "plane"),
            ],
        },
        NavNode::Group {
            label: "Local Warehouse",
            icon: "warehouse",
            children: vec![
                leaf("Ghana Sea", "/goods/ghana/sea", "ship"),
                leaf("Ghana Air", "/goods/ghana/air", "plane"),
            ],
        },
        NavNode::Leaf(leaf("Claims", "/cargos/claims", "alert-triangle")),
        NavNode::Leaf(leaf("Rates", "/rates", "calculator")),
        NavNode::Leaf(leaf("Admins", "/my-admins", "user-cog")),
        NavNode::Leaf(leaf("Notes", "/notes", "sticky-note")),
        NavNode::Leaf(leaf("Settings", "/settings", "settings")),
    ]
}

fn customer_navigation() -> Vec<NavNode> {
    vec![
        NavNode::Leaf(leaf("Dashboard", "/", "dashboard")),
        NavNode::Leaf(leaf("My Goods", "/customer/cargo/sea", "ship")),
        NavNode::Leaf(leaf("Invoices", "/goods/ghana/sea", "package")),
        NavNode::Leaf(leaf("Daily Updates", "/daily-updates/sea-goods", "bell")),
        NavNode::Leaf(leaf("Shipments", "/shipments/sea-containers", "warehouse")),
        NavNode::Leaf(leaf("My Claims", "/my-claims", "file-text")),
        NavNode::Leaf(leaf("My Notes", "/my-notes", "sticky-note")),
        NavNode::Leaf(leaf("Addresses", "/my-addresses", "map-pin")),
        NavNode::Leaf(leaf("Profile", "/my-profile", "user-cog")),
    ]
}

/// Ordered top-level node list for a capability class.
pub fn navigation_for(class: RoleClass) -> Vec<NavNode> {
    match class {
        RoleClass::AdminLike => admin_navigation(),
        RoleClass::Customer => customer_navigation(),
    }
}

/// A leaf is active on an exact match for `/` and a prefix match otherwise.
pub fn is_active(path: &str, href: &str) -> bool {
    if href == "/" {
        path == "/"
    } else {
        path.starts_with(href)
    }
}

/// A group is active iff any descendant leaf is active.
pub fn group_active(path: &str, children: &[NavLeaf]) -> bool {
    children.iter().any(|child| is_active(path, child.href))
}

/// A group renders expanded iff it is active or explicitly opened. Activity
/// forces it open even if it was never toggled.
pub fn is_expanded(group_label: &str, active: bool, open: &HashMap<String, bool>) -> bool {
    active || open.get(group_label).copied().unwrap_or(false)
}

/// Flip a single group's entry, leaving the other groups untouched; several
/// groups may be open at once.
pub fn toggle_group(open: &mut HashMap<String, bool>, group_label: &str) {
    let entry = open.entry(group_label.to_string()).or_insert(false);
    *entry = !*entry;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cargo_children() -> Vec<NavLeaf> {
        match navigation_for(RoleClass::AdminLike)
            .into_iter()
            .find(|n| matches!(n, NavNode::Group { label: "Cargo", .. }))
        {
            Some(NavNode::Group { children, .. }) => children,
            _ => panic!("admin navigation has no Cargo group"),
        }
    }

    #[test]
    fn root_path_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/clients", "/"));
    }

    #[test]
    fn non_root_paths_match_by_prefix() {
        assert!(is_active("/cargos/sea", "/cargos/sea"));
        assert!(is_active("/cargos/sea/containers/3", "/cargos/sea"));
        assert!(!is_active("/cargos/air", "/cargos/sea"));
    }

    #[test]
    fn cargo_group_expands_for_active_child_route() {
        let children = cargo_children();
        let open = HashMap::new();

        for path in ["/cargos/sea", "/cargos/air", "/cargos/sea/containers/9"] {
            let active = group_active(path, &children);
            assert!(active, "{} should activate the Cargo group", path);
            assert!(is_expanded("Cargo", active, &open));
        }

        let active = group_active("/clients", &children);
        assert!(!active);
        assert!(!is_expanded("Cargo", active, &open));
    }

    #[test]
    fn toggling_flips_only_its_own_entry() {
        let mut open = HashMap::new();
        toggle_group(&mut open, "Cargo");
        toggle_group(&mut open, "Daily Updates");
        assert!(is_expanded("Cargo", false, &open));
        assert!(is_expanded("Daily Updates", false, &open));

        toggle_group(&mut open, "Cargo");
        assert!(!is_expanded("Cargo", false, &open));
        // The other group stays open.
        assert!(is_expanded("Daily Updates", false, &open));
    }

    #[test]
    fn customer_tree_has_no_groups() {
        assert!(navigation_for(RoleClass::Customer)
            .iter()
            .all(|node| matches!(node, NavNode::Leaf(_))));
    }
}
