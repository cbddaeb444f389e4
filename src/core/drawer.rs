//! # Mobile Drawer
//!
//! Full-panel overlay with animated enter and exit.
//!
//! ```text
//!            open()            tick ≥ deadline
//!   Closed ─────────► Opening ─────────────────► Open
//!     ▲                  │ close()                 │ close()
//!     │ tick ≥ deadline  ▼                         ▼
//!     └─────────────── Closing ◄───────────────────┘
//! ```
//!
//! Opening and Closing exist only to reject re-entrant toggles while the
//! animation runs. The one exception is `close()`, which may cancel an
//! Opening drawer.
//!
//! The background scroll lock is held from `Closed → Opening` until the
//! drawer is Closed again. The guard lives inside the drawer, so dropping
//! the drawer releases it too.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Matches the 0.2s overlay fade of the site.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawerState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

// ============================================================================
// Scroll Lock
// ============================================================================

/// Suppresses background scrolling while an overlay is up.
///
/// Cloning shares the same flag. `ScrollLock::global()` is the single
/// instance the app uses.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    held: Arc<AtomicBool>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> Self {
        static GLOBAL: OnceLock<ScrollLock> = OnceLock::new();
        GLOBAL.get_or_init(ScrollLock::new).clone()
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }

    /// Take the lock. `None` if another holder already has it.
    pub fn try_acquire(&self) -> Option<ScrollLockGuard> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ScrollLockGuard {
                held: Arc::clone(&self.held),
            })
    }
}

/// Releases the scroll lock on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    held: Arc<AtomicBool>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
        debug!("Background scroll lock released");
    }
}

// ============================================================================
// Drawer
// ============================================================================

#[derive(Debug)]
pub struct MobileDrawer {
    state: DrawerState,
    /// When the current Opening/Closing transit settles.
    deadline: Option<Instant>,
    transition: Duration,
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl MobileDrawer {
    pub fn new(transition: Duration, lock: ScrollLock) -> Self {
        Self {
            state: DrawerState::Closed,
            deadline: None,
            transition,
            lock,
            guard: None,
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == DrawerState::Closed
    }

    /// True while this drawer holds the background scroll lock.
    pub fn holds_scroll_lock(&self) -> bool {
        self.guard.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Begin opening. Only valid from Closed.
    pub fn open(&mut self, now: Instant) -> bool {
        if self.state != DrawerState::Closed {
            debug!("Drawer open ignored in {:?}", self.state);
            return false;
        }
        let Some(guard) = self.lock.try_acquire() else {
            warn!("Background scroll lock already held elsewhere; drawer stays closed");
            return false;
        };
        self.guard = Some(guard);
        self.begin(DrawerState::Opening, now);
        true
    }

    /// Begin closing. Valid from Open, or from Opening as a cancel.
    pub fn close(&mut self, now: Instant) -> bool {
        match self.state {
            DrawerState::Open | DrawerState::Opening => {
                self.begin(DrawerState::Closing, now);
                true
            }
            DrawerState::Closed | DrawerState::Closing => {
                debug!("Drawer close ignored in {:?}", self.state);
                false
            }
        }
    }

    /// Hamburger activation.
    pub fn toggle(&mut self, now: Instant) -> bool {
        match self.state {
            DrawerState::Closed => self.open(now),
            DrawerState::Opening | DrawerState::Open => self.close(now),
            DrawerState::Closing => false,
        }
    }

    /// Skip the exit animation and settle at Closed immediately.
    pub fn force_close(&mut self) -> bool {
        if self.state == DrawerState::Closed {
            return false;
        }
        info!("Drawer force-closed from {:?}", self.state);
        self.settle_closed();
        true
    }

    /// Resolve a finished transit. Returns true if the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        match self.state {
            DrawerState::Opening => {
                self.deadline = None;
                self.state = DrawerState::Open;
                debug!("Drawer settled Open");
                true
            }
            DrawerState::Closing => {
                self.settle_closed();
                true
            }
            DrawerState::Closed | DrawerState::Open => {
                self.deadline = None;
                false
            }
        }
    }

    /// Release the scroll lock no matter where the drawer is.
    pub fn teardown(&mut self) {
        if self.state != DrawerState::Closed || self.guard.is_some() {
            info!("Drawer torn down in {:?}", self.state);
        }
        self.settle_closed();
    }

    fn begin(&mut self, state: DrawerState, now: Instant) {
        debug!("Drawer {:?} -> {:?}", self.state, state);
        self.state = state;
        self.deadline = Some(now + self.transition);
    }

    fn settle_closed(&mut self) {
        self.state = DrawerState::Closed;
        self.deadline = None;
        self.guard = None;
    }
}

impl Drop for MobileDrawer {
    fn drop(&mut self) {
        self.teardown();
    }
}
