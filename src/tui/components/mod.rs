//! # TUI Components
//!
//! UI pieces for the navigation surface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive a `NavSnapshot` (or the parts of it they need) as props and
//! draw it:
//! - `Header`: brand, entries, CTA or hamburger
//! - `Flyout`: desktop submenu panel
//! - `Drawer`: mobile overlay with the accordion
//!
//! All three record their interactive regions into the `HitMap` while
//! drawing, since that is the only moment their geometry is known.
//!
//! ### Stateful Components
//!
//! - `Page`: the scrolling content, backed by `PageState` which lives in
//!   `TuiState` across frames
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs      (this file)
//! ├── header.rs   (top bar)
//! ├── flyout.rs   (desktop submenu)
//! ├── drawer.rs   (mobile menu)
//! └── page.rs     (scrollable content)
//! ```

pub mod drawer;
pub mod flyout;
pub mod header;
pub mod page;

pub use drawer::{Drawer, drawer_rows};
pub use flyout::Flyout;
pub use header::{HEADER_HEIGHT, Header};
pub use page::{Page, PageState};
