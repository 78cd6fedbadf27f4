use crate::session::LoginError;

use super::super::wizard::{AuthMode, AuthStep};
use super::*;

impl App {
    pub(in crate::tui_shell) fn start_auth(&mut self, mode: AuthMode) {
        let (wizard, modal) = AuthWizard::start(mode);
        self.auth_wizard = Some(wizard);
        self.open_modal(modal);
    }

    pub(in crate::tui_shell) fn start_new_checklist(&mut self) {
        self.open_modal(Modal::text_input(
            "New checklist",
            vec!["Name:".to_string()],
            TextInputAction::NewChecklist,
            None,
        ));
    }

    pub(in crate::tui_shell) fn start_new_item(&mut self) {
        self.open_modal(Modal::text_input(
            "New item",
            vec!["Item:".to_string()],
            TextInputAction::NewItem,
            None,
        ));
    }

    /// Escape out of a text input: drops any half-finished form.
    pub(in crate::tui_shell) fn cancel_text_input(&mut self, action: &TextInputAction) {
        match action {
            TextInputAction::AuthUsername
            | TextInputAction::AuthEmail
            | TextInputAction::AuthPassword => self.auth_wizard = None,
            TextInputAction::RenameItem => self.cancel_rename(),
            TextInputAction::NewChecklist | TextInputAction::NewItem => {}
        }
    }

    pub(in crate::tui_shell) fn submit_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::AuthUsername
            | TextInputAction::AuthEmail
            | TextInputAction::AuthPassword => self.advance_auth(&action, value),
            TextInputAction::NewChecklist => self.create_checklist(&value),
            TextInputAction::NewItem => self.create_item(&value),
            TextInputAction::RenameItem => self.commit_rename(value),
        }
    }

    fn advance_auth(&mut self, action: &TextInputAction, value: String) {
        let Some(wizard) = self.auth_wizard.as_mut() else {
            return;
        };
        match wizard.advance(action, value) {
            Some(AuthStep::Next(modal)) => self.open_modal(modal),
            Some(AuthStep::Submit(credentials)) => {
                let res = self.controller.authenticate(&self.client, &credentials);
                match res {
                    Ok(()) => {
                        self.auth_wizard = None;
                        self.push_info("signed in");
                        self.sync_view();
                    }
                    Err(err) => {
                        let message = match &err {
                            LoginError::Gateway(e) => {
                                self.notices.failed(e);
                                crate::notify::describe(e)
                            }
                            LoginError::Persist(e) => {
                                tracing::warn!(error = %format!("{:#}", e), "persist session");
                                format!("could not save session: {:#}", e)
                            }
                        };
                        if let Some(w) = self.auth_wizard.as_ref() {
                            let modal = w.retry_password(&message);
                            self.open_modal(modal);
                        }
                    }
                }
            }
            None => {}
        }
    }
}
