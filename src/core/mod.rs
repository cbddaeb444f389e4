//! # Core Navigation Logic
//!
//! This module contains the header's navigation state machines.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavController        │
//!                    │  • NavAction (events)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │ NavSnapshot
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Tests    │
//!     │  Adapter   │      │  Adapter   │      │            │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`scroll`]: `ScrollTracker`, raw scroll offsets to one update per frame
//! - [`visibility`]: the header show/hide reducer
//! - [`disclosure`]: single-open submenu state (flyout and accordion)
//! - [`drawer`]: mobile drawer state machine and the background scroll lock
//! - [`controller`]: `NavController`, which wires all of the above
//! - [`action`]: `NavAction` and `update()`
//! - [`site`]: the nav link tree
//! - [`config`]: layered settings

pub mod action;
pub mod clock;
pub mod config;
pub mod controller;
pub mod disclosure;
pub mod drawer;
pub mod scroll;
pub mod site;
pub mod visibility;
