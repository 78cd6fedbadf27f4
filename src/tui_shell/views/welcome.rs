use std::any::Any;

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::session;

use super::super::{RenderCtx, View, render_view_chrome};

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct WelcomeView {
    base_url: String,
}

impl WelcomeView {
    pub(in crate::tui_shell) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl View for WelcomeView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&self) -> session::View {
        session::View::Anonymous
    }

    fn title(&self) -> &str {
        "Welcome"
    }

    fn updated_at(&self) -> &str {
        ""
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, _ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Checklist",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Sign in to see your checklists."),
            Line::from(""),
            Line::from(vec![
                Span::styled("l", Style::default().fg(Color::Yellow)),
                Span::raw(" login   "),
                Span::styled("r", Style::default().fg(Color::Yellow)),
                Span::raw(" register"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("service: {}", self.base_url),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false }),
            inner,
        );
    }
}
