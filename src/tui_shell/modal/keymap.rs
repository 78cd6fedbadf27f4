use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::text_input_validate::validate_text_input;

pub(super) enum ModalAction {
    None,
    /// Closed without submitting; carries the text input being abandoned.
    Cancel(Option<super::super::TextInputAction>),
    Confirm(super::super::PendingAction),
    SubmitTextInput {
        action: super::super::TextInputAction,
        value: String,
    },
}

pub(super) fn map_modal_key(modal: &mut super::super::Modal, key: KeyEvent) -> ModalAction {
    match &modal.kind {
        super::super::ModalKind::TextInput { action } => {
            let action = action.clone();
            match key.code {
                KeyCode::Esc => ModalAction::Cancel(Some(action)),
                KeyCode::Enter => {
                    // Passwords are sent exactly as typed.
                    let raw = if action.masked() {
                        modal.input.buf.clone()
                    } else {
                        modal.input.buf.trim().to_string()
                    };
                    match validate_text_input(&action, &raw) {
                        Ok(()) => ModalAction::SubmitTextInput { action, value: raw },
                        Err(msg) => {
                            modal.set_error(msg);
                            ModalAction::None
                        }
                    }
                }
                _ => {
                    apply_input_edit_key(modal, key);
                    ModalAction::None
                }
            }
        }

        super::super::ModalKind::ConfirmAction { action } => match key.code {
            KeyCode::Esc | KeyCode::Char('n') => ModalAction::Cancel(None),
            KeyCode::Enter | KeyCode::Char('y') => ModalAction::Confirm(action.clone()),
            _ => ModalAction::None,
        },
    }
}

fn apply_input_edit_key(modal: &mut super::super::Modal, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => modal.input.backspace(),
        KeyCode::Delete => modal.input.delete(),
        KeyCode::Left => modal.input.move_left(),
        KeyCode::Right => modal.input.move_right(),
        KeyCode::Home => modal.input.move_home(),
        KeyCode::End => modal.input.move_end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            modal.input.clear()
        }
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                modal.input.insert_char(c);
            }
        }
        _ => {}
    }
}
