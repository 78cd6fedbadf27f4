use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::notify::{NoticeLevel, Notices};
use crate::remote::RemoteClient;
use crate::session::{self, SessionController};
use crate::store::{FileSessionStore, LocalStore};

use time::OffsetDateTime;

use super::input::Input;
use super::modal;
use super::view::{RenderCtx, View};
use super::views::{ChecklistsView, ItemsView, WelcomeView};
use super::wizard::AuthWizard;

mod actions;
mod event_loop;
mod lifecycle;
mod modal_types;
mod render;
mod runtime;
mod text_input;
mod time_utils;

pub(super) use self::modal_types::{Modal, ModalKind, PendingAction, TextInputAction};
pub(super) use self::runtime::run;
pub(in crate::tui_shell) use self::time_utils::{fmt_ts_list, fmt_ts_ui};

pub(super) struct App {
    pub(super) client: RemoteClient,
    pub(super) controller: SessionController<FileSessionStore>,
    pub(super) notices: Notices,

    view: Box<dyn View>,
    // Set when the active view still has to fetch its data.
    pub(super) needs_load: bool,

    pub(super) modal: Option<Modal>,
    pub(super) auth_wizard: Option<AuthWizard>,

    pub(super) quit: bool,
}

impl App {
    pub(super) fn view(&self) -> &dyn View {
        self.view.as_ref()
    }

    pub(super) fn view_mut(&mut self) -> &mut dyn View {
        self.view.as_mut()
    }

    pub(super) fn current_view<T: 'static>(&self) -> Option<&T> {
        self.view.as_any().downcast_ref::<T>()
    }

    pub(super) fn current_view_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.view.as_any_mut().downcast_mut::<T>()
    }

    pub(super) fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub(super) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(super) fn close_modal(&mut self) {
        self.modal = None;
    }

    pub(super) fn push_info(&mut self, message: impl Into<String>) {
        self.notices.info(message);
    }
}
