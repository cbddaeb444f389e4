use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::controller::{Layout, NavController};
use crate::core::disclosure::MenuContext;
use crate::core::drawer::DrawerState;
use crate::core::visibility::Visibility;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Drawer, Flyout, HEADER_HEIGHT, Header, Page};

/// Draw one frame: the page underneath, then whichever nav overlays the
/// snapshot calls for. Rebuilds the hit map as a side effect.
pub fn draw_ui(frame: &mut Frame, nav: &NavController, tui: &mut TuiState) {
    let area = frame.area();
    let snapshot = nav.snapshot();
    tui.hits.clear();

    Page::new(&mut tui.page, tui.notice.as_deref()).render(frame, area);

    let header_area = Rect::new(area.x, area.y, area.width, HEADER_HEIGHT.min(area.height));
    let below = Rect::new(
        area.x,
        area.y + header_area.height,
        area.width,
        area.height - header_area.height,
    );

    if snapshot.visibility == Visibility::Visible {
        Header {
            site: nav.site(),
            snapshot,
            layout: nav.layout(),
            focused: tui.header_focus,
            hits: &mut tui.hits,
        }
        .render(frame, header_area);
    }

    match nav.layout() {
        Layout::Desktop => {
            if let Some(link) = nav
                .expanded_in(MenuContext::Desktop)
                .and_then(|id| nav.site().link(id))
            {
                Flyout { link, hits: &mut tui.hits }.render(frame, below);
            }
        }
        Layout::Mobile if snapshot.drawer_state != DrawerState::Closed => {
            Drawer {
                site: nav.site(),
                state: snapshot.drawer_state,
                expanded: nav.expanded_in(MenuContext::Mobile),
                focused: tui.drawer_focus,
                hits: &mut tui.hits,
            }
            .render(frame, below);
        }
        Layout::Mobile => {}
    }
}
