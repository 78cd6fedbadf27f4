use std::any::Any;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::checklists::ChecklistCollection;
use crate::model::Checklist;
use crate::notify::now_ts;
use crate::session;

use super::super::view::clamp_selection;
use super::super::{RenderCtx, View, render_view_chrome};
use super::super::app::fmt_ts_list;

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct ChecklistsView {
    pub(in crate::tui_shell) collection: ChecklistCollection,
    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) updated_at: String,
}

impl ChecklistsView {
    pub(in crate::tui_shell) fn selected_checklist(&self) -> Option<&Checklist> {
        self.collection.checklists().get(self.selected)
    }

    pub(in crate::tui_shell) fn select_last(&mut self) {
        self.selected = self.collection.checklists().len().saturating_sub(1);
    }

    pub(in crate::tui_shell) fn after_reload(&mut self) {
        self.selected = clamp_selection(self.selected, self.collection.checklists().len());
        self.updated_at = now_ts();
    }
}

impl View for ChecklistsView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&self) -> session::View {
        session::View::ChecklistList
    }

    fn title(&self) -> &str {
        "Checklists"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let len = self.collection.checklists().len();
        self.selected = clamp_selection(self.selected + 1, len);
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        if self.collection.is_loading() {
            frame.render_widget(Paragraph::new("Loading checklists..."), parts[0]);
            return;
        }
        frame.render_widget(
            Paragraph::new(self.collection.count_label()).style(Style::default().fg(Color::Gray)),
            parts[0],
        );

        let lists = self.collection.checklists();
        if lists.is_empty() {
            frame.render_widget(
                Paragraph::new("No checklists yet. Press n to create one."),
                parts[1],
            );
            return;
        }

        let rows: Vec<ListItem> = lists
            .iter()
            .map(|c| {
                let created = if c.created_at.is_empty() {
                    String::new()
                } else {
                    format!("  {}", fmt_ts_list(&c.created_at, ctx))
                };
                ListItem::new(format!("{}{}", c.name, created))
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(clamp_selection(self.selected, lists.len())));
        let list = List::new(rows)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, parts[1], &mut state);
    }
}
