use crate::model::RecordId;

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TextInputAction {
    AuthUsername,
    AuthEmail,
    AuthPassword,
    NewChecklist,
    NewItem,
    RenameItem,
}

impl TextInputAction {
    pub(in crate::tui_shell) fn masked(&self) -> bool {
        matches!(self, TextInputAction::AuthPassword)
    }
}

/// Destructive actions that wait behind a confirmation modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum PendingAction {
    DeleteChecklist { id: RecordId },
    DeleteItem { id: RecordId },
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) enum ModalKind {
    TextInput { action: TextInputAction },
    ConfirmAction { action: PendingAction },
}

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) input: Input,
    pub(in crate::tui_shell) kind: ModalKind,
}

impl Modal {
    pub(in crate::tui_shell) fn text_input(
        title: impl Into<String>,
        lines: Vec<String>,
        action: TextInputAction,
        initial: Option<String>,
    ) -> Self {
        let mut input = Input::default();
        if let Some(v) = initial {
            input.set(v);
        }
        Self {
            title: title.into(),
            lines,
            input,
            kind: ModalKind::TextInput { action },
        }
    }

    pub(in crate::tui_shell) fn confirm(
        title: impl Into<String>,
        lines: Vec<String>,
        action: PendingAction,
    ) -> Self {
        Self {
            title: title.into(),
            lines,
            input: Input::default(),
            kind: ModalKind::ConfirmAction { action },
        }
    }

    pub(in crate::tui_shell) fn set_error(&mut self, msg: impl Into<String>) {
        self.lines.retain(|l| !l.starts_with("error:"));
        self.lines.push(format!("error: {}", msg.into()));
    }
}
