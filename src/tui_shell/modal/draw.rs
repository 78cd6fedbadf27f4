use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, modal: &super::super::Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 70);
    let h = area.height.saturating_sub(6).clamp(7, 12);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = ratatui::layout::Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let lines: Vec<Line> = modal
        .lines
        .iter()
        .map(|s| {
            if s.starts_with("error:") {
                Line::from(Span::styled(s.as_str(), Style::default().fg(Color::Red)))
            } else {
                Line::from(s.as_str())
            }
        })
        .collect();

    match &modal.kind {
        super::super::ModalKind::ConfirmAction { .. } => {
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
        super::super::ModalKind::TextInput { action } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

            let shown = modal.input.display(action.masked());
            let input = Paragraph::new(Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::raw(shown),
            ]))
            .block(Block::default().borders(Borders::TOP).title("Enter: ok  Esc: cancel"));
            frame.render_widget(input, parts[1]);

            // Cursor sits after the "> " prompt, one row below the top border.
            let cx = parts[1].x + 2 + modal.input.cursor as u16;
            let cy = parts[1].y + 1;
            frame.set_cursor_position((cx.min(parts[1].right().saturating_sub(1)), cy));
        }
    }
}
