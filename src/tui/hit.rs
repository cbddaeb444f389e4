//! # Hit Map
//!
//! Where each interactive region landed in the last frame. Components fill
//! it while rendering; mouse events are resolved against it afterwards.
//!
//! Lookup order matters because overlays sit on top of the page:
//! hamburger → flyout → header → drawer → backdrop → page.

use ratatui::layout::{Position, Rect};

use crate::core::disclosure::{EntryId, InteractionTarget};
use crate::tui::components::flyout::CONTACT_HREF;

/// One selectable row inside the mobile drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerRow {
    /// Accordion header for an entry with a submenu.
    Trigger(EntryId),
    /// Any link: top-level leaf, submenu item, or the contact link.
    Link(String),
    /// The call-to-action button at the bottom.
    Cta,
}

impl DrawerRow {
    pub fn is_contact(&self) -> bool {
        matches!(self, DrawerRow::Link(href) if href == CONTACT_HREF)
    }
}

/// What a pointer landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Hamburger,
    Trigger(EntryId),
    Link(String),
    Panel(EntryId),
    PanelLink { parent: EntryId, href: String },
    Header,
    DrawerRow(DrawerRow),
    Drawer,
    Backdrop,
    Page,
}

impl Hit {
    /// How the desktop flyout sees this hit.
    pub fn interaction_target(&self) -> InteractionTarget {
        match self {
            Hit::Trigger(id) => InteractionTarget::Trigger(*id),
            Hit::Panel(parent) | Hit::PanelLink { parent, .. } => InteractionTarget::Panel(*parent),
            _ => InteractionTarget::Elsewhere,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeaderEntry {
    pub rect: Rect,
    pub id: EntryId,
    pub href: String,
    pub expandable: bool,
}

#[derive(Debug, Default, Clone)]
pub struct HitMap {
    pub header: Option<Rect>,
    pub entries: Vec<HeaderEntry>,
    pub hamburger: Option<Rect>,
    pub flyout: Option<(Rect, EntryId)>,
    pub flyout_links: Vec<(Rect, String)>,
    pub drawer: Option<Rect>,
    pub drawer_rows: Vec<(Rect, DrawerRow)>,
    pub backdrop: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Hit {
        let at = Position::new(column, row);
        let inside = |rect: &Rect| rect.contains(at);

        if self.hamburger.as_ref().is_some_and(inside) {
            return Hit::Hamburger;
        }
        if let Some((panel, parent)) = &self.flyout
            && panel.contains(at)
        {
            return self
                .flyout_links
                .iter()
                .find(|(rect, _)| rect.contains(at))
                .map(|(_, href)| Hit::PanelLink {
                    parent: *parent,
                    href: href.clone(),
                })
                .unwrap_or(Hit::Panel(*parent));
        }
        if let Some(entry) = self.entries.iter().find(|e| e.rect.contains(at)) {
            return if entry.expandable {
                Hit::Trigger(entry.id)
            } else {
                Hit::Link(entry.href.clone())
            };
        }
        if self.header.as_ref().is_some_and(inside) {
            return Hit::Header;
        }
        if let Some((_, row)) = self.drawer_rows.iter().find(|(rect, _)| rect.contains(at)) {
            return Hit::DrawerRow(row.clone());
        }
        if self.drawer.as_ref().is_some_and(inside) {
            return Hit::Drawer;
        }
        if self.backdrop.as_ref().is_some_and(inside) {
            return Hit::Backdrop;
        }
        Hit::Page
    }
}
