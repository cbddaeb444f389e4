//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::clock::ManualClock;
use crate::core::controller::{Layout, NavController, NavSettings};
use crate::core::disclosure::EntryId;
use crate::core::drawer::ScrollLock;
use crate::core::site::SiteNav;

/// The only default entry with a submenu.
pub const FEATURES: EntryId = EntryId(1);
pub const TRANSITION: Duration = Duration::from_millis(200);
pub const FRAME: Duration = Duration::from_millis(16);

/// A controller wired to a manual clock and its own scroll lock, so tests
/// never touch the process-wide lock.
pub struct TestNav {
    pub controller: NavController,
    pub clock: ManualClock,
    pub lock: ScrollLock,
}

impl TestNav {
    pub fn new(layout: Layout) -> Self {
        let clock = ManualClock::new(Instant::now());
        let lock = ScrollLock::new();
        let settings = NavSettings {
            hide_threshold: 10,
            transition: TRANSITION,
            frame_interval: FRAME,
        };
        let controller = NavController::with_parts(
            SiteNav::default(),
            settings,
            layout,
            lock.clone(),
            Arc::new(clock.clone()),
        );
        Self { controller, clock, lock }
    }

    pub fn desktop() -> Self {
        Self::new(Layout::Desktop)
    }

    pub fn mobile() -> Self {
        Self::new(Layout::Mobile)
    }

    /// Hamburger, then wait out the enter animation.
    pub fn open_drawer(&mut self) {
        self.controller.on_hamburger_activate();
        self.clock.advance(TRANSITION);
        self.controller.on_frame();
    }

    /// One scroll event followed by one frame.
    pub fn scroll_to(&mut self, position: u32) {
        self.controller.on_scroll(position);
        self.clock.advance(FRAME);
        self.controller.on_frame();
    }
}
