use std::any::Any;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Gauge, List, ListItem, ListState, Paragraph};

use crate::items::ItemCollection;
use crate::model::Item;
use crate::notify::now_ts;
use crate::session;

use super::super::view::clamp_selection;
use super::super::{RenderCtx, View, render_view_chrome};

#[derive(Debug)]
pub(in crate::tui_shell) struct ItemsView {
    pub(in crate::tui_shell) collection: ItemCollection,
    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) updated_at: String,
}

impl ItemsView {
    pub(in crate::tui_shell) fn new(collection: ItemCollection) -> Self {
        Self {
            collection,
            selected: 0,
            updated_at: String::new(),
        }
    }

    pub(in crate::tui_shell) fn selected_item(&self) -> Option<&Item> {
        self.collection.items().get(self.selected)
    }

    pub(in crate::tui_shell) fn select_last(&mut self) {
        self.selected = self.collection.items().len().saturating_sub(1);
    }

    pub(in crate::tui_shell) fn after_reload(&mut self) {
        self.selected = clamp_selection(self.selected, self.collection.items().len());
        self.updated_at = now_ts();
    }
}

impl View for ItemsView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&self) -> session::View {
        session::View::ItemList
    }

    fn title(&self) -> &str {
        self.collection.label()
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let len = self.collection.items().len();
        self.selected = clamp_selection(self.selected + 1, len);
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, _ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        if self.collection.is_loading() {
            frame.render_widget(Paragraph::new("Loading items..."), parts[0]);
            return;
        }

        let progress = self.collection.progress();
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
                .percent(u16::from(progress.percent))
                .label(format!("{}%", progress.percent)),
            parts[0],
        );
        frame.render_widget(
            Paragraph::new(progress.summary()).style(Style::default().fg(Color::Gray)),
            parts[1],
        );

        let items = self.collection.items();
        if items.is_empty() {
            frame.render_widget(Paragraph::new("No items yet. Press n to add one."), parts[2]);
            return;
        }

        let editing = self.collection.editing().map(|e| &e.item_id);
        let rows: Vec<ListItem> = items
            .iter()
            .map(|i| {
                let mark = if i.item_completion_status { "[x]" } else { "[ ]" };
                let style = if i.item_completion_status {
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                let suffix = if editing == Some(&i.id) { "  (editing)" } else { "" };
                ListItem::new(format!("{} {}{}", mark, i.name, suffix)).style(style)
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(clamp_selection(self.selected, items.len())));
        let list = List::new(rows)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, parts[2], &mut state);
    }
}
