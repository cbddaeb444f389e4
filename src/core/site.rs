//! # Site Navigation
//!
//! The link tree shown in the header and the drawer. Static display data;
//! only the ids and the presence of a submenu matter to the controller.

use serde::{Deserialize, Serialize};

use crate::core::disclosure::EntryId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavSubItem {
    pub id: u32,
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavLink {
    pub id: u32,
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub submenu: Vec<NavSubItem>,
}

impl NavLink {
    pub fn entry_id(&self) -> EntryId {
        EntryId(self.id)
    }

    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteNav {
    pub name: String,
    pub cta: String,
    pub links: Vec<NavLink>,
}

impl SiteNav {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            name: "KubeClaw".to_string(),
            cta: "Get Started".to_string(),
            links,
        }
    }

    pub fn link(&self, id: EntryId) -> Option<&NavLink> {
        self.links.iter().find(|l| l.entry_id() == id)
    }

    /// True if `id` names a top-level entry that can be expanded.
    pub fn is_expandable(&self, id: EntryId) -> bool {
        self.link(id).is_some_and(NavLink::has_submenu)
    }
}

impl Default for SiteNav {
    fn default() -> Self {
        Self::new(default_links())
    }
}

fn sub(id: u32, name: &str, description: &str) -> NavSubItem {
    NavSubItem {
        id,
        name: name.to_string(),
        href: "#features".to_string(),
        description: Some(description.to_string()),
    }
}

fn leaf(id: u32, name: &str, href: &str) -> NavLink {
    NavLink {
        id,
        name: name.to_string(),
        href: href.to_string(),
        submenu: Vec::new(),
    }
}

pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink {
            id: 1,
            name: "Features".to_string(),
            href: "#features".to_string(),
            submenu: vec![
                sub(1, "Secure Sandboxing", "Isolated container execution"),
                sub(2, "Auto-Scaling", "Scale 1 to 1000+ nodes"),
                sub(3, "Self-Healing", "Kubernetes auto-restarts"),
            ],
        },
        leaf(2, "How It Works", "#workflow"),
        leaf(3, "FAQ", "#faq"),
        leaf(4, "Docs", "https://github.com/jianan1104/kubeclaw#readme"),
        leaf(5, "GitHub", "https://github.com/jianan1104/kubeclaw"),
    ]
}
