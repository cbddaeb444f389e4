//! # Flyout Component
//!
//! Desktop submenu panel, dropped below the header for the expanded entry.
//! One card per submenu item, laid out in a row, with the contact footer
//! underneath.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::core::site::NavLink;
use crate::tui::component::Component;
use crate::tui::hit::HitMap;

const CARD_HEIGHT: u16 = 5;
const FOOTER_HEIGHT: u16 = 1;
pub const CONTACT_HREF: &str = "/contact";

pub struct Flyout<'a> {
    pub link: &'a NavLink,
    pub hits: &'a mut HitMap,
}

impl Flyout<'_> {
    fn panel_rect(area: Rect) -> Rect {
        // borders + cards + footer
        let height = (CARD_HEIGHT + FOOTER_HEIGHT + 2).min(area.height);
        Rect::new(
            area.x + 1.min(area.width),
            area.y,
            area.width.saturating_sub(2),
            height,
        )
    }
}

impl Component for Flyout<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = Self::panel_rect(area);
        if panel.width == 0 || panel.height == 0 {
            return;
        }
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.link.name));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        self.hits.flyout = Some((panel, self.link.entry_id()));

        let [cards_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(inner);

        let count = self.link.submenu.len().max(1) as u32;
        let columns = Layout::horizontal(
            self.link
                .submenu
                .iter()
                .map(|_| Constraint::Ratio(1, count)),
        )
        .spacing(1)
        .split(cards_area);

        for (item, rect) in self.link.submenu.iter().zip(columns.iter()) {
            let mut lines = vec![Line::from(Span::styled(
                item.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if let Some(description) = &item.description {
                lines.push(Line::from(Span::styled(
                    description.as_str(),
                    Style::default().fg(Color::Gray),
                )));
            }
            let card = Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().add_modifier(Modifier::DIM)),
                )
                .wrap(Wrap { trim: true });
            frame.render_widget(card, *rect);
            self.hits.flyout_links.push((*rect, item.href.clone()));
        }

        let footer = Line::from(vec![
            Span::styled("Looking for a custom solution? ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Let's talk →",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            ),
        ])
        .centered();
        frame.render_widget(footer, footer_area);
        self.hits
            .flyout_links
            .push((footer_area, CONTACT_HREF.to_string()));
    }
}
