use std::sync::Arc;
use std::time::{Duration, Instant};

use kubeclaw_nav::core::action::{Effect, NavAction, update};
use kubeclaw_nav::core::clock::ManualClock;
use kubeclaw_nav::core::controller::{Layout, NavController, NavSettings, NavSnapshot};
use kubeclaw_nav::core::disclosure::{
    DisclosureMenu, EntryId, InteractionId, InteractionTarget, MenuContext,
};
use kubeclaw_nav::core::drawer::{DrawerState, MobileDrawer, ScrollLock};
use kubeclaw_nav::core::site::{NavLink, NavSubItem, SiteNav, default_links};
use kubeclaw_nav::core::visibility::Visibility;

// ============================================================================
// Helper Functions
// ============================================================================

const TRANSITION: Duration = Duration::from_millis(200);
const FRAME: Duration = Duration::from_millis(16);

struct Harness {
    nav: NavController,
    clock: ManualClock,
    lock: ScrollLock,
}

/// Controller on a manual clock with its own scroll lock
fn harness(site: SiteNav, layout: Layout) -> Harness {
    let clock = ManualClock::new(Instant::now());
    let lock = ScrollLock::new();
    let settings = NavSettings {
        hide_threshold: 10,
        transition: TRANSITION,
        frame_interval: FRAME,
    };
    let nav = NavController::with_parts(site, settings, layout, lock.clone(), Arc::new(clock.clone()));
    Harness { nav, clock, lock }
}

/// Default links, plus a submenu on "How It Works" (entry 2)
fn site_with_two_submenus() -> SiteNav {
    let mut links = default_links();
    links[1].submenu = vec![NavSubItem {
        id: 1,
        name: "Quick Start".to_string(),
        href: "#workflow".to_string(),
        description: None,
    }];
    SiteNav::new(links)
}

impl Harness {
    fn scroll_frames(&mut self, positions: &[u32]) -> Vec<Visibility> {
        positions
            .iter()
            .map(|&p| {
                self.nav.on_scroll(p);
                self.clock.advance(FRAME);
                self.nav.on_frame();
                self.nav.snapshot().visibility
            })
            .collect()
    }

    fn settle(&mut self) {
        self.clock.advance(TRANSITION);
        self.nav.on_frame();
    }
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_near_top_is_always_visible() {
    let mut h = harness(SiteNav::default(), Layout::Desktop);
    let seen = h.scroll_frames(&[0, 50, 5]);
    assert_eq!(seen, vec![Visibility::Visible, Visibility::Hidden, Visibility::Visible]);

    // Downward moves under the threshold still show the header
    let seen = h.scroll_frames(&[3, 7, 9]);
    assert!(seen.iter().all(|v| *v == Visibility::Visible));
}

#[test]
fn test_open_menu_keeps_header_visible_while_scrolling_down() {
    let mut h = harness(SiteNav::default(), Layout::Desktop);
    h.nav.on_submenu_trigger_activate(EntryId(1));
    let seen = h.scroll_frames(&[20, 40, 80, 160]);
    assert!(seen.iter().all(|v| *v == Visibility::Visible));
}

#[test]
fn test_monotone_burst_hides_once() {
    let mut h = harness(SiteNav::default(), Layout::Desktop);
    let positions: Vec<u32> = (0..40).map(|i| i * 7).collect();
    let seen = h.scroll_frames(&positions);

    let flips = seen.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(flips, 1);
    assert_eq!(seen.last(), Some(&Visibility::Hidden));
}

#[test]
fn test_samples_within_one_frame_coalesce() {
    let mut h = harness(SiteNav::default(), Layout::Desktop);
    // 100 then back to 60 inside one frame: only 60 is seen, which is still down from 0
    h.nav.on_scroll(100);
    h.nav.on_scroll(60);
    h.clock.advance(FRAME);
    h.nav.on_frame();
    assert_eq!(h.nav.snapshot().visibility, Visibility::Hidden);
}

// ============================================================================
// Disclosure
// ============================================================================

#[test]
fn test_single_open_invariant() {
    let mut menu = DisclosureMenu::new(MenuContext::Desktop);
    menu.expand(EntryId(1));
    menu.expand(EntryId(2));
    assert_eq!(menu.expanded(), Some(EntryId(2)));
    assert!(!menu.is_expanded(EntryId(1)));

    let before = menu.expansion();
    assert!(!menu.expand(EntryId(2)));
    assert_eq!(menu.expansion(), before);
}

#[test]
fn test_repeated_interaction_does_not_flicker() {
    let mut menu = DisclosureMenu::new(MenuContext::Desktop);
    let gesture = InteractionId(7);
    // pointer down, click and focus from the same gesture
    assert!(menu.toggle(EntryId(1), gesture));
    assert!(!menu.toggle(EntryId(1), gesture));
    assert!(!menu.toggle(EntryId(1), gesture));
    assert_eq!(menu.expanded(), Some(EntryId(1)));

    assert!(menu.toggle(EntryId(1), InteractionId(8)));
    assert_eq!(menu.expanded(), None);
}

#[test]
fn test_outside_interaction_collapses_desktop_flyout() {
    let mut h = harness(SiteNav::default(), Layout::Desktop);
    h.nav.on_submenu_trigger_activate(EntryId(1));

    h.nav.on_outside_interaction(InteractionTarget::Panel(EntryId(1)));
    assert_eq!(h.nav.snapshot().expanded_entry_id, Some(EntryId(1)));

    h.nav.on_outside_interaction(InteractionTarget::Elsewhere);
    assert_eq!(h.nav.snapshot().expanded_entry_id, None);
}

// ============================================================================
// Drawer
// ============================================================================

#[test]
fn test_drawer_holds_lock_through_opening_and_open() {
    let lock = ScrollLock::new();
    let mut drawer = MobileDrawer::new(TRANSITION, lock.clone());
    let t0 = Instant::now();

    assert!(drawer.open(t0));
    assert_eq!(drawer.state(), DrawerState::Opening);
    assert!(lock.is_held());

    drawer.tick(t0 + TRANSITION / 2);
    assert_eq!(drawer.state(), DrawerState::Opening);
    assert!(lock.is_held());

    drawer.tick(t0 + TRANSITION);
    assert_eq!(drawer.state(), DrawerState::Open);
    assert!(lock.is_held());
}

#[test]
fn test_close_during_opening_never_settles_open() {
    let lock = ScrollLock::new();
    let mut drawer = MobileDrawer::new(TRANSITION, lock.clone());
    let t0 = Instant::now();

    drawer.open(t0);
    assert!(drawer.close(t0 + Duration::from_millis(50)));
    assert_eq!(drawer.state(), DrawerState::Closing);

    // The original open deadline passes without landing on Open
    drawer.tick(t0 + TRANSITION);
    assert_eq!(drawer.state(), DrawerState::Closing);

    drawer.tick(t0 + Duration::from_millis(50) + TRANSITION);
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert!(!lock.is_held());
}

#[test]
fn test_two_drawers_cannot_double_lock() {
    let lock = ScrollLock::new();
    let mut first = MobileDrawer::new(TRANSITION, lock.clone());
    let mut second = MobileDrawer::new(TRANSITION, lock.clone());
    let t0 = Instant::now();

    assert!(first.open(t0));
    assert!(!second.open(t0));
    assert!(first.holds_scroll_lock());
    assert!(!second.holds_scroll_lock());
    assert_eq!(second.state(), DrawerState::Closed);

    first.force_close();
    assert!(!lock.is_held());
}

// ============================================================================
// Controller scenarios
// ============================================================================

#[test]
fn test_nav_link_from_open_drawer_with_expanded_submenu() {
    let mut h = harness(site_with_two_submenus(), Layout::Mobile);
    h.nav.on_hamburger_activate();
    h.settle();
    h.nav.on_submenu_trigger_activate(EntryId(2));
    assert_eq!(h.nav.snapshot().drawer_state, DrawerState::Open);
    assert_eq!(h.nav.snapshot().expanded_entry_id, Some(EntryId(2)));

    h.nav.on_nav_link_activate();
    assert_eq!(
        h.nav.snapshot(),
        NavSnapshot {
            visibility: Visibility::Visible,
            drawer_state: DrawerState::Closed,
            expanded_entry_id: None,
        }
    );
    assert!(!h.lock.is_held());
}

#[test]
fn test_teardown_while_opening_releases_lock() {
    let mut h = harness(SiteNav::default(), Layout::Mobile);
    h.nav.on_hamburger_activate();
    assert_eq!(h.nav.snapshot().drawer_state, DrawerState::Opening);
    assert!(h.lock.is_held());

    h.nav.teardown();
    assert!(!h.lock.is_held());
}

#[test]
fn test_dropping_controller_releases_lock() {
    let h = harness(SiteNav::default(), Layout::Mobile);
    let Harness { mut nav, lock, .. } = h;
    nav.on_hamburger_activate();
    assert!(lock.is_held());
    drop(nav);
    assert!(!lock.is_held());
}

#[test]
fn test_backdrop_close_resets_accordion_once_closed() {
    let mut h = harness(SiteNav::default(), Layout::Mobile);
    h.nav.on_hamburger_activate();
    h.settle();
    h.nav.on_submenu_trigger_activate(EntryId(1));

    h.nav.on_backdrop_activate();
    assert_eq!(h.nav.snapshot().drawer_state, DrawerState::Closing);
    h.settle();
    let snap = h.nav.snapshot();
    assert_eq!(snap.drawer_state, DrawerState::Closed);
    assert_eq!(snap.expanded_entry_id, None);
    assert!(!h.lock.is_held());
}

#[test]
fn test_hamburger_ignored_while_closing() {
    let mut h = harness(SiteNav::default(), Layout::Mobile);
    h.nav.on_hamburger_activate();
    h.settle();
    h.nav.on_hamburger_activate();
    assert_eq!(h.nav.snapshot().drawer_state, DrawerState::Closing);

    assert!(!h.nav.on_hamburger_activate());
    assert_eq!(h.nav.snapshot().drawer_state, DrawerState::Closing);
}

#[test]
fn test_update_reports_redraw_only_on_change() {
    let mut h = harness(SiteNav::default(), Layout::Desktop);
    assert_eq!(update(&mut h.nav, NavAction::Frame), Effect::None);
    assert_eq!(update(&mut h.nav, NavAction::HamburgerActivate), Effect::None);

    let interaction = h.nav.new_interaction();
    assert_eq!(
        update(&mut h.nav, NavAction::SubmenuTrigger(EntryId(1), interaction)),
        Effect::Redraw
    );
    assert_eq!(
        update(&mut h.nav, NavAction::SubmenuTrigger(EntryId(1), interaction)),
        Effect::None
    );
}

#[test]
fn test_custom_site_links_drive_expandability() {
    let site = SiteNav::new(vec![NavLink {
        id: 9,
        name: "Platform".to_string(),
        href: "#platform".to_string(),
        submenu: Vec::new(),
    }]);
    let mut h = harness(site, Layout::Desktop);
    assert!(!h.nav.on_submenu_trigger_activate(EntryId(9)));
    assert_eq!(h.nav.snapshot().expanded_entry_id, None);
}
