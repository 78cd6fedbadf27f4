use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let (who, who_style) = if app.controller.session().is_some() {
        ("signed in", Style::default().fg(Color::Green))
    } else {
        ("anonymous", Style::default().fg(Color::Red))
    };
    let spans = vec![
        Span::styled(
            "Checklist",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.controller.view().label(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(app.client.base_url().to_string()),
        Span::raw("  "),
        Span::styled(who, who_style),
    ];
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Main view
    let ctx = RenderCtx {
        now: OffsetDateTime::now_utc(),
    };
    app.view().render(frame, chunks[1], &ctx);

    // Latest notice
    {
        let mut lines = Vec::new();
        if let Some(n) = app.notices.latest() {
            let style = match n.level {
                NoticeLevel::Info => Style::default().fg(Color::White),
                NoticeLevel::Failure => Style::default().fg(Color::Red),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", fmt_ts_ui(&n.at)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(n.message.as_str(), style),
            ]));
        } else {
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP).title("Last")),
            chunks[2],
        );
    }

    // Key hints
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            key_hints(app.controller.view()),
            Style::default().fg(Color::Gray),
        ))),
        chunks[3],
    );

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}

fn key_hints(view: session::View) -> &'static str {
    match view {
        session::View::Anonymous => "l: login  r: register  q: quit",
        session::View::ChecklistList => {
            "Enter: open  n: new  d: delete  g: reload  L: logout  q: quit"
        }
        session::View::ItemList => {
            "space: toggle  n: new  e: rename  d: delete  g: reload  Esc: back  q: quit"
        }
    }
}
