//! # Header Component
//!
//! The fixed bar at the top: brand, nav entries, and either the CTA button
//! (desktop) or the hamburger (mobile).
//!
//! ## Props
//!
//! - `site`: link tree to lay out
//! - `snapshot`: drives the expanded-trigger highlight and the hamburger glyph
//! - `layout`: which right-hand control to show
//! - `focused`: keyboard focus among the entries (desktop)
//!
//! Whether the header is drawn at all is decided by the caller from
//! `snapshot.visibility`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear};

use crate::core::controller::{Layout, NavSnapshot};
use crate::core::drawer::DrawerState;
use crate::core::site::SiteNav;
use crate::tui::component::Component;
use crate::tui::hit::{HeaderEntry, HitMap};

/// Rows the header occupies, bottom border included.
pub const HEADER_HEIGHT: u16 = 3;

pub struct Header<'a> {
    pub site: &'a SiteNav,
    pub snapshot: NavSnapshot,
    pub layout: Layout,
    pub focused: Option<usize>,
    pub hits: &'a mut HitMap,
}

impl Header<'_> {
    fn entry_label(name: &str, expandable: bool, expanded: bool) -> String {
        match (expandable, expanded) {
            (true, true) => format!(" {name} ▴ "),
            (true, false) => format!(" {name} ▾ "),
            (false, _) => format!(" {name} "),
        }
    }

    fn render_entries(&mut self, frame: &mut Frame, area: Rect, row: Rect, start_x: u16, limit_x: u16) {
        let mut x = start_x;
        for (index, link) in self.site.links.iter().enumerate() {
            let expanded = self.snapshot.expanded_entry_id == Some(link.entry_id());
            let label = Self::entry_label(&link.name, link.has_submenu(), expanded);
            let span = Span::raw(label);
            let width = span.width() as u16;
            if x.saturating_add(width) > limit_x {
                break;
            }

            let mut style = Style::default();
            if expanded {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            if self.focused == Some(index) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            let cell = Rect::new(x, row.y, width, 1);
            frame.render_widget(span.style(style), cell);

            // The hit region spans the full header height so the pointer can
            // travel straight down into the flyout.
            self.hits.entries.push(HeaderEntry {
                rect: Rect::new(x, area.y, width, area.height),
                id: link.entry_id(),
                href: link.href.clone(),
                expandable: link.has_submenu(),
            });
            x += width + 1;
        }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().add_modifier(Modifier::DIM));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hits.header = Some(area);

        if inner.height == 0 {
            return;
        }
        // Content sits on the middle row
        let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);

        let brand = Span::styled(
            format!(" {} ", self.site.name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        let brand_width = brand.width() as u16;
        frame.render_widget(brand, Rect::new(row.x, row.y, brand_width.min(row.width), 1));

        let right_x = row.x + row.width;
        match self.layout {
            Layout::Desktop => {
                let cta = Span::styled(
                    format!(" {} ", self.site.cta),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
                let cta_width = (cta.width() as u16).min(row.width);
                let cta_x = right_x.saturating_sub(cta_width + 1);
                frame.render_widget(cta, Rect::new(cta_x, row.y, cta_width, 1));
                self.render_entries(frame, area, row, row.x + brand_width + 2, cta_x.saturating_sub(1));
            }
            Layout::Mobile => {
                let glyph = if self.snapshot.drawer_state == DrawerState::Closed {
                    " ☰ "
                } else {
                    " ✕ "
                };
                let button = Span::styled(glyph, Style::default().add_modifier(Modifier::BOLD));
                let width = button.width() as u16;
                let x = right_x.saturating_sub(width + 1);
                let rect = Rect::new(x, row.y, width, 1);
                frame.render_widget(button, rect);
                self.hits.hamburger = Some(Rect::new(x, area.y, width, area.height));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disclosure::EntryId;
    use crate::core::visibility::Visibility;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn snapshot(expanded: Option<EntryId>, drawer: DrawerState) -> NavSnapshot {
        NavSnapshot {
            visibility: Visibility::Visible,
            drawer_state: drawer,
            expanded_entry_id: expanded,
        }
    }

    fn draw(layout: Layout, snap: NavSnapshot, width: u16) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(width, HEADER_HEIGHT)).unwrap();
        let site = SiteNav::default();
        let mut hits = HitMap::default();
        terminal
            .draw(|f| {
                Header {
                    site: &site,
                    snapshot: snap,
                    layout,
                    focused: None,
                    hits: &mut hits,
                }
                .render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (text, hits)
    }

    #[test]
    fn test_desktop_header_lists_entries() {
        let (text, hits) = draw(Layout::Desktop, snapshot(None, DrawerState::Closed), 120);
        assert!(text.contains("KubeClaw"));
        assert!(text.contains("Features ▾"));
        assert!(text.contains("FAQ"));
        assert!(text.contains("Get Started"));
        assert_eq!(hits.entries.len(), 5);
        assert!(hits.entries[0].expandable);
        assert!(hits.hamburger.is_none());
    }

    #[test]
    fn test_expanded_trigger_is_marked() {
        let (text, _) = draw(Layout::Desktop, snapshot(Some(EntryId(1)), DrawerState::Closed), 120);
        assert!(text.contains("Features ▴"));
    }

    #[test]
    fn test_mobile_header_shows_hamburger() {
        let (text, hits) = draw(Layout::Mobile, snapshot(None, DrawerState::Closed), 40);
        assert!(text.contains('☰'));
        assert!(hits.hamburger.is_some());
        assert!(hits.entries.is_empty());

        let (text, _) = draw(Layout::Mobile, snapshot(None, DrawerState::Opening), 40);
        assert!(text.contains('✕'));
    }
}
