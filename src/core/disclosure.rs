//! # Disclosure Menu
//!
//! Tracks which top-level nav entry, if any, has its submenu expanded.
//!
//! The expanded entry is stored as a single tagged value rather than a
//! per-entry flag, so at most one entry can be open per context:
//!
//! ```text
//! Expansion::Collapsed
//! Expansion::Expanded(EntryId)
//! ```
//!
//! Desktop (flyout) and mobile (accordion) each get their own
//! `DisclosureMenu`. They never share state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a top-level navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sequence number of the input event that caused an interaction.
///
/// One physical gesture can reach a trigger as several events. They all
/// carry the same id, which lets `toggle` act on only the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded(EntryId),
}

impl Expansion {
    pub fn entry(self) -> Option<EntryId> {
        match self {
            Expansion::Collapsed => None,
            Expansion::Expanded(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuContext {
    /// Hover/focus flyout in the header.
    Desktop,
    /// Accordion inside the mobile drawer.
    Mobile,
}

/// Where a pointer or focus interaction landed, relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionTarget {
    Trigger(EntryId),
    Panel(EntryId),
    Elsewhere,
}

#[derive(Debug)]
pub struct DisclosureMenu {
    context: MenuContext,
    expansion: Expansion,
    last_toggle: Option<InteractionId>,
}

impl DisclosureMenu {
    pub fn new(context: MenuContext) -> Self {
        Self {
            context,
            expansion: Expansion::Collapsed,
            last_toggle: None,
        }
    }

    pub fn context(&self) -> MenuContext {
        self.context
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    pub fn expanded(&self) -> Option<EntryId> {
        self.expansion.entry()
    }

    pub fn is_expanded(&self, id: EntryId) -> bool {
        self.expansion == Expansion::Expanded(id)
    }

    /// Expand `id`, collapsing whatever else was open. Returns true if
    /// anything changed.
    pub fn expand(&mut self, id: EntryId) -> bool {
        self.set(Expansion::Expanded(id))
    }

    /// Collapse `id` if it is the expanded entry.
    pub fn collapse(&mut self, id: EntryId) -> bool {
        if self.is_expanded(id) {
            self.set(Expansion::Collapsed)
        } else {
            false
        }
    }

    pub fn collapse_all(&mut self) -> bool {
        self.set(Expansion::Collapsed)
    }

    /// Flip `id`. A repeated toggle from the same interaction is ignored.
    pub fn toggle(&mut self, id: EntryId, interaction: InteractionId) -> bool {
        if self.last_toggle == Some(interaction) {
            return false;
        }
        self.last_toggle = Some(interaction);

        if self.is_expanded(id) {
            self.collapse(id)
        } else {
            self.expand(id)
        }
    }

    /// Flyouts open on hover. The accordion ignores hover.
    ///
    /// A hover that opens the flyout counts as the first toggle of its
    /// gesture, so a click in the same pointer dwell does not close it again.
    pub fn hover(&mut self, id: EntryId, interaction: InteractionId) -> bool {
        if self.context != MenuContext::Desktop {
            return false;
        }
        let changed = self.expand(id);
        if changed {
            self.last_toggle = Some(interaction);
        }
        changed
    }

    /// Desktop only: collapse when an interaction lands outside the
    /// expanded entry's trigger and panel.
    pub fn dismiss_on_outside_interaction(&mut self, target: InteractionTarget) -> bool {
        if self.context != MenuContext::Desktop {
            return false;
        }
        let Some(open) = self.expanded() else {
            return false;
        };
        match target {
            InteractionTarget::Trigger(id) | InteractionTarget::Panel(id) if id == open => false,
            _ => self.collapse_all(),
        }
    }

    fn set(&mut self, next: Expansion) -> bool {
        if self.expansion == next {
            return false;
        }
        log::debug!("{:?} menu: {:?} -> {:?}", self.context, self.expansion, next);
        self.expansion = next;
        true
    }
}
