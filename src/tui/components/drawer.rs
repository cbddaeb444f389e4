//! # Drawer Component
//!
//! Mobile menu overlay: a dimmed backdrop plus a panel holding the nav
//! entries as an accordion, the CTA, and the contact link.
//!
//! While the drawer is in transit (Opening/Closing) the panel is drawn
//! dimmed, standing in for the fade.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding};

use crate::core::disclosure::EntryId;
use crate::core::drawer::DrawerState;
use crate::core::site::SiteNav;
use crate::tui::component::Component;
use crate::tui::components::flyout::CONTACT_HREF;
use crate::tui::hit::{DrawerRow, HitMap};

/// Rows the drawer shows, in order, for the given accordion state.
pub fn drawer_rows(site: &SiteNav, expanded: Option<EntryId>) -> Vec<DrawerRow> {
    let mut rows = Vec::new();
    for link in &site.links {
        if link.has_submenu() {
            rows.push(DrawerRow::Trigger(link.entry_id()));
            if expanded == Some(link.entry_id()) {
                rows.extend(link.submenu.iter().map(|s| DrawerRow::Link(s.href.clone())));
            }
        } else {
            rows.push(DrawerRow::Link(link.href.clone()));
        }
    }
    rows.push(DrawerRow::Cta);
    rows.push(DrawerRow::Link(CONTACT_HREF.to_string()));
    rows
}

pub struct Drawer<'a> {
    pub site: &'a SiteNav,
    pub state: DrawerState,
    pub expanded: Option<EntryId>,
    pub focused: usize,
    pub hits: &'a mut HitMap,
}

/// Display text for a row: (label, optional dimmed description, indented).
fn row_labels(site: &SiteNav, expanded: Option<EntryId>) -> Vec<(String, Option<String>, bool)> {
    let mut labels = Vec::new();
    for link in &site.links {
        if link.has_submenu() {
            let chevron = if expanded == Some(link.entry_id()) { "▴" } else { "▾" };
            labels.push((format!("{} {chevron}", link.name.to_uppercase()), None, false));
            if expanded == Some(link.entry_id()) {
                labels.extend(
                    link.submenu
                        .iter()
                        .map(|s| (s.name.clone(), s.description.clone(), true)),
                );
            }
        } else {
            labels.push((link.name.to_uppercase(), None, false));
        }
    }
    labels.push((format!(" {} ", site.cta), None, false));
    labels.push((
        "Let's talk →".to_string(),
        Some("Looking for a custom solution?".to_string()),
        false,
    ));
    labels
}

impl Drawer<'_> {
    fn row_line(&self, index: usize, row: &DrawerRow, label: &(String, Option<String>, bool)) -> Line<'static> {
        let (text, description, indented) = label;
        let focused = index == self.focused;
        let marker = if focused { "› " } else { "  " };
        let mut style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        match row {
            DrawerRow::Cta => style = style.fg(Color::Black).bg(Color::Cyan),
            _ if row.is_contact() => style = style.fg(Color::Cyan),
            _ if !indented => style = style.add_modifier(Modifier::BOLD),
            _ => {}
        }

        let mut spans = vec![Span::raw(marker)];
        if *indented {
            spans.push(Span::raw("   "));
        }
        if let Some(description) = description
            && row.is_contact()
        {
            spans.push(Span::styled(format!("{description} "), Style::default().fg(Color::Gray)));
            spans.push(Span::styled(text.clone(), style));
        } else {
            spans.push(Span::styled(text.clone(), style));
            if let Some(description) = description {
                spans.push(Span::styled(
                    format!("  {description}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        Line::from(spans)
    }
}

impl Component for Drawer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Backdrop: dim whatever is underneath
        frame.render_widget(
            Block::default().style(Style::default().add_modifier(Modifier::DIM)),
            area,
        );
        self.hits.backdrop = Some(area);

        let width = (area.width * 3 / 4).max(32).min(area.width);
        let panel = Rect::new(area.x + area.width - width, area.y, width, area.height);
        frame.render_widget(Clear, panel);

        let settled = self.state == DrawerState::Open;
        let border_style = if settled {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(border_style)
            .padding(Padding::new(2, 1, 1, 1));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        self.hits.drawer = Some(panel);

        let rows = drawer_rows(self.site, self.expanded);
        let labels = row_labels(self.site, self.expanded);
        let mut y = inner.y;
        for (index, (row, label)) in rows.iter().zip(&labels).enumerate() {
            // CTA block sits after a spacer row
            if *row == DrawerRow::Cta {
                y = y.saturating_add(1);
            }
            if y >= inner.y + inner.height {
                break;
            }
            let rect = Rect::new(inner.x, y, inner.width, 1);
            let mut line = self.row_line(index, row, label);
            if !settled {
                line = line.patch_style(Style::default().add_modifier(Modifier::DIM));
            }
            frame.render_widget(line, rect);
            self.hits.drawer_rows.push((rect, row.clone()));
            y = y.saturating_add(1);
        }
    }
}
