//! # Scroll Tracker
//!
//! Samples the viewport's vertical scroll position and derives a direction
//! signal from it.
//!
//! Raw scroll events arrive far more often than the screen repaints, so the
//! tracker splits the work in two:
//!
//! ```text
//! scroll event ──► record()   (store newest sample, nothing else)
//! frame tick   ──► on_frame() (coalesce, compare, emit at most once)
//! ```
//!
//! Only the last *emitted* sample is kept for comparison. A burst that goes
//! 20 → 50 → 30 inside one frame is reported as a single `Up` step from 20
//! to 30.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// One observation of the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSample {
    /// Distance from the top of the page. Never negative.
    pub position: u32,
    pub at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

impl ScrollDirection {
    /// Direction of travel going from `previous` to `current`.
    pub fn between(previous: u32, current: u32) -> Self {
        use std::cmp::Ordering;
        match current.cmp(&previous) {
            Ordering::Greater => ScrollDirection::Down,
            Ordering::Less => ScrollDirection::Up,
            Ordering::Equal => ScrollDirection::None,
        }
    }
}

/// What the tracker hands to the visibility reducer once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub position: u32,
    pub direction: ScrollDirection,
}

#[derive(Debug)]
pub struct ScrollTracker {
    /// Last sample handed out by `on_frame`.
    emitted: Option<ScrollSample>,
    /// Newest sample recorded since the last emission.
    pending: Option<ScrollSample>,
    last_frame: Option<Instant>,
    frame_interval: Duration,
}

impl ScrollTracker {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            emitted: None,
            pending: None,
            last_frame: None,
            frame_interval,
        }
    }

    /// Passive listener entry point. Overwrites any sample still waiting
    /// for the next frame.
    pub fn record(&mut self, position: u32, at: Instant) {
        self.pending = Some(ScrollSample { position, at });
    }

    /// Flush the pending sample, if any. Returns `None` when nothing was
    /// recorded or when called again inside the same frame window.
    pub fn on_frame(&mut self, now: Instant) -> Option<ScrollUpdate> {
        if let Some(last) = self.last_frame
            && now.saturating_duration_since(last) < self.frame_interval
        {
            return None;
        }

        let sample = self.pending.take()?;
        self.last_frame = Some(now);

        let previous = self.emitted.map_or(0, |s| s.position);
        let direction = ScrollDirection::between(previous, sample.position);
        self.emitted = Some(sample);

        Some(ScrollUpdate {
            position: sample.position,
            direction,
        })
    }

    /// Position of the last emitted sample (0 before the first frame).
    pub fn position(&self) -> u32 {
        self.emitted.map_or(0, |s| s.position)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
