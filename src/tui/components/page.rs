//! # Page Component
//!
//! The scrolling marketing page behind the header. Static copy; its only
//! job is to produce a scroll offset for the navigation controller.
//!
//! `Page` is a transient component (created each frame) that wraps
//! `&'a mut PageState` (persistent state), the same split the other
//! stateful components use.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;

struct Section {
    anchor: &'static str,
    badge: &'static str,
    title: &'static str,
    body: &'static [&'static str],
}

const SECTIONS: &[Section] = &[
    Section {
        anchor: "#hero",
        badge: "Kubernetes-native AI Agent Infrastructure",
        title: "Scale your OpenClaw agents from 1 to 1,000+",
        body: &[
            "KubeClaw brings enterprise-grade orchestration to OpenClaw. Secure sandboxing, \
             auto-scaling, and self-healing for your AI agent fleet.",
            "⭐ Star on GitHub",
        ],
    },
    Section {
        anchor: "#demo",
        badge: "Deploy. Scale. Relax.",
        title: "Get your AI agent infrastructure running in minutes",
        body: &[
            "One-Command Setup — Clone the repo and run ./kubeclaw.sh init. Answer a few \
             questions, and your cluster is ready.",
            "Secure Sandbox — Every agent task runs in an isolated container.",
            "Scale Instantly — Scale from 1 to 1,000+ worker nodes with a single command.",
            "Self-Healing — If a node crashes, Kubernetes automatically restarts it.",
        ],
    },
    Section {
        anchor: "#workflow",
        badge: "Quick Start",
        title: "Deploy AI agents on Kubernetes",
        body: &[
            "KubeClaw turns OpenClaw nodes into cloud-native, auto-scaling, self-healing \
             microservices running on any Kubernetes cluster.",
            "Clone and run the CLI — git clone the repo, run ./kubeclaw.sh init, and your \
             cluster is configured with OpenClaw nodes in minutes.",
            "Scale with one command — Run ./kubeclaw.sh scale 20 to deploy 20 worker nodes.",
        ],
    },
    Section {
        anchor: "#features",
        badge: "Enterprise Ready",
        title: "Stop babysitting servers. Start building AI.",
        body: &[
            "Works on any Kubernetes cluster — EKS, GKE, AKS, or your homelab k3s setup.",
            "Container Isolation — Each node runs in its own container with cgroups and namespaces.",
            "Resource Limits — Set CPU and memory limits per node.",
            "Secret Management — Gateway tokens are stored as Kubernetes Secrets.",
        ],
    },
    Section {
        anchor: "#faq",
        badge: "FAQ",
        title: "Frequently asked questions",
        body: &[
            "Do I need an existing cluster? — Any Kubernetes cluster works, including k3s.",
            "Is it free? — KubeClaw is open source.",
            "How do I scale? — ./kubeclaw.sh scale <n>.",
        ],
    },
    Section {
        anchor: "#footer",
        badge: "KubeClaw",
        title: "Kubernetes-native orchestration for OpenClaw AI agents",
        body: &["github.com/jianan1104/kubeclaw"],
    },
];

/// Scroll state for the page. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct PageState {
    pub scroll_state: ScrollViewState,
    /// Total rendered height of all sections (from the last frame)
    pub content_height: u16,
    /// Last known viewport height (for clamping between frames)
    pub viewport_height: u16,
    /// Top row of each section, by anchor
    pub anchors: Vec<(&'static str, u16)>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_to(&mut self, y: u16) {
        let y = y.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.offset()) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(target as u16);
    }

    /// Scroll so the section for `href` sits at the top. False if the page
    /// has no such anchor.
    pub fn jump_to_anchor(&mut self, href: &str) -> bool {
        match self.anchors.iter().find(|(anchor, _)| *anchor == href) {
            Some(&(_, y)) => {
                self.scroll_to(y);
                true
            }
            None => false,
        }
    }
}

pub struct Page<'a> {
    pub state: &'a mut PageState,
    /// Transient notice (e.g. an external link that was "opened").
    pub notice: Option<&'a str>,
}

impl<'a> Page<'a> {
    pub fn new(state: &'a mut PageState, notice: Option<&'a str>) -> Self {
        Self { state, notice }
    }
}

fn section_paragraph(section: &Section) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(section.badge, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            section.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for text in section.body {
        lines.push(Line::from(*text));
        lines.push(Line::default());
    }
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().add_modifier(Modifier::DIM))
                .padding(Padding::new(2, 2, 1, 0)),
        )
        .wrap(Wrap { trim: true })
}

impl Component for Page<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        let rendered: Vec<(Paragraph, u16)> = SECTIONS
            .iter()
            .map(|section| {
                let paragraph = section_paragraph(section);
                let height = paragraph.line_count(content_width) as u16;
                (paragraph, height)
            })
            .collect();

        self.state.anchors.clear();
        let mut y: u16 = 0;
        for (section, (_, height)) in SECTIONS.iter().zip(&rendered) {
            self.state.anchors.push((section.anchor, y));
            y = y.saturating_add(*height);
        }
        let notice_height = u16::from(self.notice.is_some());
        self.state.content_height = y.saturating_add(notice_height);
        self.state.viewport_height = area.height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (paragraph, height) in rendered {
            scroll_view.render_widget(paragraph, Rect::new(0, y_offset, content_width, height));
            y_offset = y_offset.saturating_add(height);
        }
        if let Some(notice) = self.notice {
            let line = Paragraph::new(notice).style(Style::default().fg(Color::Yellow));
            scroll_view.render_widget(line, Rect::new(0, y_offset, content_width, 1));
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_state() -> PageState {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut state = PageState::new();
        terminal
            .draw(|f| Page::new(&mut state, None).render(f, f.area()))
            .unwrap();
        state
    }

    #[test]
    fn test_render_records_anchors() {
        let state = rendered_state();
        assert_eq!(state.anchors.len(), SECTIONS.len());
        assert_eq!(state.anchors[0], ("#hero", 0));
        assert!(state.content_height > state.viewport_height);
    }

    #[test]
    fn test_jump_to_anchor() {
        let mut state = rendered_state();
        assert!(state.jump_to_anchor("#workflow"));
        let expected = state
            .anchors
            .iter()
            .find(|(a, _)| *a == "#workflow")
            .map(|(_, y)| *y)
            .unwrap();
        assert_eq!(state.offset(), expected.min(state.max_offset()));
        assert!(!state.jump_to_anchor("https://example.com"));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = rendered_state();
        state.scroll_by(-5);
        assert_eq!(state.offset(), 0);
        state.scroll_by(10_000);
        assert_eq!(state.offset(), state.max_offset());
    }
}
