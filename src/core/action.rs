//! # Actions
//!
//! Everything that can happen to the navigation becomes a `NavAction`.
//! Wheel tick? That's `NavAction::Scroll(offset)`.
//! Hamburger clicked? That's `NavAction::HamburgerActivate`.
//!
//! `update()` applies one action to the controller and tells the caller
//! whether a redraw is needed. Actions are applied strictly in the order
//! they arrive; nothing is merged across actions.
//!
//! ```text
//! NavController + NavAction  →  update()  →  Effect
//! ```

use log::{debug, trace};

use crate::core::controller::{Layout, NavController};
use crate::core::disclosure::{EntryId, InteractionId, InteractionTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Viewport scroll offset changed.
    Scroll(u32),
    /// A frame is about to be drawn.
    Frame,
    HamburgerActivate,
    BackdropActivate,
    NavLinkActivate,
    SubmenuTrigger(EntryId, InteractionId),
    SubmenuHover(EntryId, InteractionId),
    Outside(InteractionTarget),
    Escape,
    SetLayout(Layout),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
}

pub fn update(nav: &mut NavController, action: NavAction) -> Effect {
    if !matches!(action, NavAction::Frame | NavAction::Scroll(_)) {
        debug!("Nav action: {:?}", action);
    }
    let before = nav.snapshot();

    let changed = match action {
        NavAction::Scroll(position) => {
            nav.on_scroll(position);
            false
        }
        NavAction::Frame => nav.on_frame(),
        NavAction::HamburgerActivate => nav.on_hamburger_activate(),
        NavAction::BackdropActivate => nav.on_backdrop_activate(),
        NavAction::NavLinkActivate => nav.on_nav_link_activate(),
        NavAction::SubmenuTrigger(id, interaction) => nav.on_submenu_trigger(id, interaction),
        NavAction::SubmenuHover(id, interaction) => nav.on_submenu_trigger_hover(id, interaction),
        NavAction::Outside(target) => nav.on_outside_interaction(target),
        NavAction::Escape => nav.on_escape(),
        NavAction::SetLayout(layout) => nav.set_layout(layout),
    };

    let after = nav.snapshot();
    if after != before
        && let Ok(json) = serde_json::to_string(&after)
    {
        trace!("Nav snapshot: {json}");
    }

    if changed || after != before {
        Effect::Redraw
    } else {
        Effect::None
    }
}
