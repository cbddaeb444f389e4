//! # Navigation Controller
//!
//! Composition root for the header. Owns every piece of navigation state
//! and is the only thing the presentation layer talks to.
//!
//! ```text
//! NavController
//! ├── tracker: ScrollTracker          // raw scroll → per-frame update
//! ├── visibility: VisibilityController // header shown/hidden
//! ├── desktop: DisclosureMenu          // flyout
//! ├── mobile: DisclosureMenu           // accordion, reset when drawer closes
//! ├── drawer: MobileDrawer             // overlay + scroll lock
//! └── layout: Layout                   // which of the two menus is live
//! ```
//!
//! Every operation is a synchronous reducer step. After any menu or drawer
//! change the visibility is re-evaluated, so an open menu is never left
//! under a hidden header.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::clock::{Clock, SystemClock};
use crate::core::disclosure::{
    DisclosureMenu, EntryId, InteractionId, InteractionTarget, MenuContext,
};
use crate::core::drawer::{DrawerState, MobileDrawer, ScrollLock};
use crate::core::scroll::{ScrollDirection, ScrollTracker, ScrollUpdate};
use crate::core::site::SiteNav;
use crate::core::visibility::{Visibility, VisibilityController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

/// Read-only view of the navigation state for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSnapshot {
    pub visibility: Visibility,
    pub drawer_state: DrawerState,
    pub expanded_entry_id: Option<EntryId>,
}

/// Tunables the controller is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSettings {
    pub hide_threshold: u32,
    pub transition: Duration,
    pub frame_interval: Duration,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            hide_threshold: crate::core::visibility::DEFAULT_HIDE_THRESHOLD,
            transition: crate::core::drawer::DEFAULT_TRANSITION,
            frame_interval: Duration::from_millis(16),
        }
    }
}

pub struct NavController {
    site: SiteNav,
    layout: Layout,
    tracker: ScrollTracker,
    visibility: VisibilityController,
    desktop: DisclosureMenu,
    mobile: DisclosureMenu,
    drawer: MobileDrawer,
    clock: Arc<dyn Clock>,
    next_interaction: u64,
}

impl NavController {
    pub fn new(site: SiteNav, settings: NavSettings, layout: Layout) -> Self {
        Self::with_parts(site, settings, layout, ScrollLock::global(), Arc::new(SystemClock))
    }

    /// Build with an explicit scroll lock and clock.
    pub fn with_parts(
        site: SiteNav,
        settings: NavSettings,
        layout: Layout,
        lock: ScrollLock,
        clock: Arc<dyn Clock>,
    ) -> Self {
        info!(
            "Nav controller ready: {} links, layout {:?}, threshold {}, transition {:?}",
            site.links.len(),
            layout,
            settings.hide_threshold,
            settings.transition
        );
        Self {
            site,
            layout,
            tracker: ScrollTracker::new(settings.frame_interval),
            visibility: VisibilityController::new(settings.hide_threshold),
            desktop: DisclosureMenu::new(MenuContext::Desktop),
            mobile: DisclosureMenu::new(MenuContext::Mobile),
            drawer: MobileDrawer::new(settings.transition, lock),
            clock,
            next_interaction: 0,
        }
    }

    pub fn site(&self) -> &SiteNav {
        &self.site
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            visibility: self.visibility.state(),
            drawer_state: self.drawer.state(),
            expanded_entry_id: self.active_menu().expanded(),
        }
    }

    /// Expansion of a specific context, regardless of the active layout.
    pub fn expanded_in(&self, context: MenuContext) -> Option<EntryId> {
        match context {
            MenuContext::Desktop => self.desktop.expanded(),
            MenuContext::Mobile => self.mobile.expanded(),
        }
    }

    pub fn any_menu_open(&self) -> bool {
        !self.drawer.is_closed() || self.desktop.expanded().is_some() || self.mobile.expanded().is_some()
    }

    pub fn holds_scroll_lock(&self) -> bool {
        self.drawer.holds_scroll_lock()
    }

    /// When the pending drawer transit settles, if one is running.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.drawer.deadline()
    }

    /// A scroll sample is waiting for the next frame.
    pub fn has_pending_scroll(&self) -> bool {
        self.tracker.has_pending()
    }

    // ------------------------------------------------------------------
    // Scroll path
    // ------------------------------------------------------------------

    pub fn on_scroll(&mut self, position: u32) {
        let now = self.clock.now();
        self.tracker.record(position, now);
    }

    /// Once per rendered frame: settle drawer transits and flush scroll.
    pub fn on_frame(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = self.drawer.tick(now);
        if changed {
            self.reset_accordion_if_closed();
        }
        if let Some(update) = self.tracker.on_frame(now) {
            let any_open = self.any_menu_open();
            changed |= self.visibility.apply(update, any_open);
        }
        if changed {
            self.refresh_visibility();
        }
        changed
    }

    // ------------------------------------------------------------------
    // Activation surface
    // ------------------------------------------------------------------

    pub fn on_hamburger_activate(&mut self) -> bool {
        if self.layout != Layout::Mobile {
            debug!("Hamburger ignored in {:?} layout", self.layout);
            return false;
        }
        let now = self.clock.now();
        let changed = self.drawer.toggle(now);
        self.settle(changed)
    }

    pub fn on_backdrop_activate(&mut self) -> bool {
        let now = self.clock.now();
        let changed = self.drawer.close(now);
        self.settle(changed)
    }

    /// Link activation is a navigate-away: everything closes at once.
    pub fn on_nav_link_activate(&mut self) -> bool {
        let mut changed = self.drawer.force_close();
        changed |= self.desktop.collapse_all();
        changed |= self.mobile.collapse_all();
        self.settle(changed)
    }

    pub fn on_submenu_trigger_activate(&mut self, id: EntryId) -> bool {
        let interaction = self.new_interaction();
        self.on_submenu_trigger(id, interaction)
    }

    /// Trigger activation tagged with the input event that caused it.
    pub fn on_submenu_trigger(&mut self, id: EntryId, interaction: InteractionId) -> bool {
        if !self.site.is_expandable(id) {
            debug!("Trigger {} has no submenu", id);
            return false;
        }
        let changed = match self.layout {
            Layout::Desktop => self.desktop.toggle(id, interaction),
            Layout::Mobile if self.drawer_accepts_input() => self.mobile.toggle(id, interaction),
            Layout::Mobile => {
                debug!("Accordion trigger {} ignored while drawer {:?}", id, self.drawer.state());
                false
            }
        };
        self.settle(changed)
    }

    pub fn on_submenu_trigger_hover(&mut self, id: EntryId, interaction: InteractionId) -> bool {
        if self.layout != Layout::Desktop || !self.site.is_expandable(id) {
            return false;
        }
        let changed = self.desktop.hover(id, interaction);
        self.settle(changed)
    }

    pub fn on_outside_interaction(&mut self, target: InteractionTarget) -> bool {
        let changed = self.desktop.dismiss_on_outside_interaction(target);
        self.settle(changed)
    }

    /// Keyboard dismissal.
    pub fn on_escape(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = self.desktop.collapse_all();
        changed |= self.drawer.close(now);
        self.settle(changed)
    }

    /// Viewport crossed the breakpoint.
    pub fn set_layout(&mut self, layout: Layout) -> bool {
        if layout == self.layout {
            return false;
        }
        info!("Layout {:?} -> {:?}", self.layout, layout);
        match layout {
            Layout::Desktop => {
                self.drawer.force_close();
                self.mobile.collapse_all();
            }
            Layout::Mobile => {
                self.desktop.collapse_all();
            }
        }
        self.layout = layout;
        self.settle(true)
    }

    /// Controller is going away. Releases the scroll lock whatever state
    /// the drawer is in.
    pub fn teardown(&mut self) {
        self.drawer.teardown();
        self.desktop.collapse_all();
        self.mobile.collapse_all();
        self.refresh_visibility();
    }

    pub fn new_interaction(&mut self) -> InteractionId {
        self.next_interaction += 1;
        InteractionId(self.next_interaction)
    }

    fn active_menu(&self) -> &DisclosureMenu {
        match self.layout {
            Layout::Desktop => &self.desktop,
            Layout::Mobile => &self.mobile,
        }
    }

    fn drawer_accepts_input(&self) -> bool {
        matches!(self.drawer.state(), DrawerState::Opening | DrawerState::Open)
    }

    fn settle(&mut self, changed: bool) -> bool {
        if changed {
            self.reset_accordion_if_closed();
            self.refresh_visibility();
        }
        changed
    }

    fn reset_accordion_if_closed(&mut self) {
        if self.drawer.is_closed() {
            self.mobile.collapse_all();
        }
    }

    /// Re-run the reducer without movement so the menu-open pin applies now.
    fn refresh_visibility(&mut self) {
        let update = ScrollUpdate {
            position: self.tracker.position(),
            direction: ScrollDirection::None,
        };
        let any_open = self.any_menu_open();
        self.visibility.apply(update, any_open);
    }
}
