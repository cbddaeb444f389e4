//! # Header Visibility
//!
//! Decides whether the header is on screen. The decision is a pure function
//! of the previous state and one scroll update:
//!
//! ```text
//! (previous, position, direction, any_menu_open)  →  reduce()  →  Visibility
//! ```
//!
//! No timers and no hysteresis. The threshold is a hard cutoff.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::scroll::{ScrollDirection, ScrollUpdate};

/// Below this offset the header is always shown.
pub const DEFAULT_HIDE_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Visibility after one scroll update.
///
/// An open menu pins the header in place so it can never carry an open
/// panel off screen.
pub fn reduce(
    previous: Visibility,
    position: u32,
    direction: ScrollDirection,
    any_menu_open: bool,
    threshold: u32,
) -> Visibility {
    if any_menu_open || position < threshold {
        return Visibility::Visible;
    }
    match direction {
        ScrollDirection::Down => Visibility::Hidden,
        ScrollDirection::Up => Visibility::Visible,
        ScrollDirection::None => previous,
    }
}

#[derive(Debug)]
pub struct VisibilityController {
    state: Visibility,
    threshold: u32,
}

impl VisibilityController {
    pub fn new(threshold: u32) -> Self {
        Self {
            state: Visibility::Visible,
            threshold,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Feed one update through the reducer. Returns true if the state flipped.
    pub fn apply(&mut self, update: ScrollUpdate, any_menu_open: bool) -> bool {
        let next = reduce(
            self.state,
            update.position,
            update.direction,
            any_menu_open,
            self.threshold,
        );
        if next == self.state {
            return false;
        }
        debug!(
            "Header {:?} -> {:?} (position={}, direction={:?}, menu_open={})",
            self.state, next, update.position, update.direction, any_menu_open
        );
        self.state = next;
        true
    }
}
