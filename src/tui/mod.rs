//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page and
//! the navigation overlays, and translates input into core::NavAction values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Every loop iteration sends `NavAction::Frame` first, which settles
//! drawer transits and flushes coalesced scroll samples. Then:
//!
//! - **Busy** (drawer in transit, or a scroll sample pending): polls at the
//!   frame interval so deadlines are met on time.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Pointer model
//!
//! Activation happens on mouse press, and every press is its own
//! interaction. The one exception: when hovering (or Tab focus) just opened
//! a flyout, the first activation of that same trigger reuses the hover's
//! interaction id, so it is absorbed instead of closing the panel again.
//! Later presses toggle normally.
//!
//! Hover fires when the pointer enters a trigger, not on every move inside it.

pub mod component;
pub mod components;
pub mod event;
pub mod hit;
pub mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::LayoutMode;
use crate::core::action::{Effect, NavAction, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::{Layout, NavController};
use crate::core::disclosure::{EntryId, InteractionId, InteractionTarget, MenuContext};
use crate::core::drawer::DrawerState;
use crate::tui::components::{PageState, drawer_rows};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::hit::{DrawerRow, Hit, HitMap};

const IDLE_POLL: Duration = Duration::from_millis(500);
/// Where the CTA button sends the reader.
const CTA_HREF: &str = "#workflow";

/// TUI-specific presentation state (not part of the navigation core)
pub struct TuiState {
    pub page: PageState,
    pub hits: HitMap,
    /// Keyboard focus among the header entries (desktop)
    pub header_focus: Option<usize>,
    /// Keyboard focus among the drawer rows (mobile)
    pub drawer_focus: usize,
    /// Trigger the pointer is resting on
    pub dwell: Option<EntryId>,
    /// Flyout opened by hover or focus whose opening interaction has not
    /// been absorbed by an activation yet
    pub hover_opened: Option<(EntryId, InteractionId)>,
    /// Status line shown at the bottom of the page
    pub notice: Option<String>,
    pub layout_mode: LayoutMode,
    pub breakpoint: u16,
}

impl TuiState {
    pub fn new(layout_mode: LayoutMode, breakpoint: u16) -> Self {
        Self {
            page: PageState::new(),
            hits: HitMap::default(),
            header_focus: None,
            drawer_focus: 0,
            dwell: None,
            hover_opened: None,
            notice: None,
            layout_mode,
            breakpoint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = terminal.size().and_then(|size| {
        let layout = config
            .layout_mode
            .layout_for(size.width, config.breakpoint_columns);
        let mut nav = NavController::new(config.site(), config.settings(), layout);
        let mut tui = TuiState::new(config.layout_mode, config.breakpoint_columns);

        let result = event_loop(&mut terminal, &mut nav, &mut tui, config.frame_interval);
        nav.teardown();
        result
    });

    ratatui::restore();
    info!("Terminal restored");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    nav: &mut NavController,
    tui: &mut TuiState,
    frame_interval: Duration,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if update(nav, NavAction::Frame) == Effect::Redraw {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, nav, tui))?;
            needs_redraw = false;
        }

        let busy = nav.next_deadline().is_some() || nav.has_pending_scroll();
        let timeout = if busy { frame_interval } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next frame
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(nav, tui, event) == Control::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}

/// Apply one input event. Hit-testing uses the map from the last drawn frame.
pub fn handle_event(nav: &mut NavController, tui: &mut TuiState, event: TuiEvent) -> Control {
    let drawer_up = nav.layout() == Layout::Mobile && nav.snapshot().drawer_state != DrawerState::Closed;

    match event {
        TuiEvent::Quit => return Control::Quit,
        TuiEvent::Escape => {
            tui.notice = None;
            tui.hover_opened = None;
            update(nav, NavAction::Escape);
        }
        TuiEvent::Menu => {
            tui.drawer_focus = 0;
            update(nav, NavAction::HamburgerActivate);
        }
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            let forward = event == TuiEvent::FocusNext;
            if drawer_up {
                let count = drawer_rows(nav.site(), nav.snapshot().expanded_entry_id).len();
                tui.drawer_focus = cycle(Some(tui.drawer_focus), count, forward).unwrap_or(0);
            } else if nav.layout() == Layout::Desktop {
                tui.header_focus = cycle(tui.header_focus, nav.site().links.len(), forward);
                focus_header_entry(nav, tui);
            }
        }
        TuiEvent::Enter => {
            if drawer_up {
                let rows = drawer_rows(nav.site(), nav.snapshot().expanded_entry_id);
                if let Some(row) = rows.get(tui.drawer_focus).cloned() {
                    activate_drawer_row(nav, tui, row);
                }
            } else if let Some(index) = tui.header_focus
                && let Some(link) = nav.site().links.get(index).cloned()
            {
                if link.has_submenu() {
                    let interaction = activation_interaction(nav, tui, link.entry_id());
                    update(nav, NavAction::SubmenuTrigger(link.entry_id(), interaction));
                } else {
                    activate_link(nav, tui, &link.href);
                }
            }
        }
        TuiEvent::Up if drawer_up => tui.drawer_focus = tui.drawer_focus.saturating_sub(1),
        TuiEvent::Down if drawer_up => {
            let count = drawer_rows(nav.site(), nav.snapshot().expanded_entry_id).len();
            tui.drawer_focus = (tui.drawer_focus + 1).min(count.saturating_sub(1));
        }
        TuiEvent::Up | TuiEvent::WheelUp => scroll_page(nav, tui, -1),
        TuiEvent::Down | TuiEvent::WheelDown => scroll_page(nav, tui, 1),
        TuiEvent::PageUp => {
            let page = i32::from(tui.page.viewport_height.saturating_sub(2).max(1));
            scroll_page(nav, tui, -page);
        }
        TuiEvent::PageDown => {
            let page = i32::from(tui.page.viewport_height.saturating_sub(2).max(1));
            scroll_page(nav, tui, page);
        }
        TuiEvent::Home => {
            let offset = i32::from(tui.page.offset());
            scroll_page(nav, tui, -offset);
        }
        TuiEvent::MouseMove(column, row) => {
            let hit = tui.hits.hit_test(column, row);
            if nav.layout() == Layout::Desktop {
                match hit {
                    Hit::Trigger(id) if tui.dwell != Some(id) => {
                        tui.dwell = Some(id);
                        hover_open(nav, tui, id);
                    }
                    Hit::Trigger(_) => {}
                    _ => tui.dwell = None,
                }
                update(nav, NavAction::Outside(hit.interaction_target()));
            }
        }
        TuiEvent::MouseDown(column, row) => {
            let hit = tui.hits.hit_test(column, row);
            debug!("Press at ({}, {}) -> {:?}", column, row, hit);
            update(nav, NavAction::Outside(hit.interaction_target()));
            match hit {
                Hit::Hamburger => {
                    tui.drawer_focus = 0;
                    update(nav, NavAction::HamburgerActivate);
                }
                Hit::Trigger(id) => {
                    let interaction = activation_interaction(nav, tui, id);
                    update(nav, NavAction::SubmenuTrigger(id, interaction));
                }
                Hit::Link(href) | Hit::PanelLink { href, .. } => activate_link(nav, tui, &href),
                Hit::DrawerRow(row) => activate_drawer_row(nav, tui, row),
                Hit::Backdrop => {
                    update(nav, NavAction::BackdropActivate);
                }
                Hit::Panel(_) | Hit::Header | Hit::Drawer | Hit::Page => {}
            }
        }
        TuiEvent::Resize(width, _) => {
            let layout = tui.layout_mode.layout_for(width, tui.breakpoint);
            if update(nav, NavAction::SetLayout(layout)) == Effect::Redraw {
                tui.header_focus = None;
                tui.drawer_focus = 0;
                tui.dwell = None;
                tui.hover_opened = None;
            }
        }
    }
    Control::Continue
}

/// Hover (pointer entry or keyboard focus) on a desktop trigger. Remembers
/// the interaction if it is the one that opened the flyout.
fn hover_open(nav: &mut NavController, tui: &mut TuiState, id: EntryId) {
    let before = nav.expanded_in(MenuContext::Desktop);
    let interaction = nav.new_interaction();
    update(nav, NavAction::SubmenuHover(id, interaction));
    if before != Some(id) && nav.expanded_in(MenuContext::Desktop) == Some(id) {
        tui.hover_opened = Some((id, interaction));
    }
}

/// Interaction id for activating trigger `id`. Reuses the hover's id once,
/// while the flyout that hover opened is still up; otherwise a fresh one.
fn activation_interaction(nav: &mut NavController, tui: &mut TuiState, id: EntryId) -> InteractionId {
    match tui.hover_opened.take() {
        Some((opened, interaction))
            if opened == id && nav.expanded_in(MenuContext::Desktop) == Some(id) =>
        {
            interaction
        }
        _ => nav.new_interaction(),
    }
}

/// Keyboard focus landed on a header entry: a focus interaction for the
/// flyout. Expandable entries open on focus, anything else dismisses.
fn focus_header_entry(nav: &mut NavController, tui: &mut TuiState) {
    let Some(link) = tui
        .header_focus
        .and_then(|index| nav.site().links.get(index).cloned())
    else {
        return;
    };
    let target = if link.has_submenu() {
        hover_open(nav, tui, link.entry_id());
        InteractionTarget::Trigger(link.entry_id())
    } else {
        InteractionTarget::Elsewhere
    };
    update(nav, NavAction::Outside(target));
}

fn scroll_page(nav: &mut NavController, tui: &mut TuiState, delta: i32) {
    if nav.holds_scroll_lock() {
        debug!("Page scroll suppressed while the drawer holds the lock");
        return;
    }
    tui.page.scroll_by(delta);
    update(nav, NavAction::Scroll(u32::from(tui.page.offset())));
}

fn activate_drawer_row(nav: &mut NavController, tui: &mut TuiState, row: DrawerRow) {
    match row {
        DrawerRow::Trigger(id) => {
            let interaction = nav.new_interaction();
            update(nav, NavAction::SubmenuTrigger(id, interaction));
        }
        DrawerRow::Link(href) => activate_link(nav, tui, &href),
        DrawerRow::Cta => activate_link(nav, tui, CTA_HREF),
    }
}

/// Follow a link: close every menu, then either jump to the page anchor or
/// report where the link would have gone.
fn activate_link(nav: &mut NavController, tui: &mut TuiState, href: &str) {
    update(nav, NavAction::NavLinkActivate);
    tui.drawer_focus = 0;
    tui.dwell = None;
    tui.hover_opened = None;
    if tui.page.jump_to_anchor(href) {
        tui.notice = None;
        update(nav, NavAction::Scroll(u32::from(tui.page.offset())));
    } else {
        info!("Link outside the page: {}", href);
        tui.notice = Some(format!("→ {href}"));
    }
}

fn cycle(current: Option<usize>, count: usize, forward: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => count - 1,
        (Some(i), true) => (i + 1) % count,
        (Some(i), false) => (i + count - 1) % count,
    })
}
