use crate::remote::{LoginRequest, RegisterRequest};
use crate::session::Credentials;

use super::{Modal, TextInputAction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }
}

/// Login/registration form collected as a chain of text inputs. Starting a
/// wizard in either mode begins from an empty form.
#[derive(Clone, Debug)]
pub(super) struct AuthWizard {
    pub(super) mode: AuthMode,
    username: String,
    email: String,
}

pub(super) enum AuthStep {
    Next(Modal),
    Submit(Credentials),
}

impl AuthWizard {
    pub(super) fn start(mode: AuthMode) -> (Self, Modal) {
        let w = Self {
            mode,
            username: String::new(),
            email: String::new(),
        };
        let modal = w.prompt(TextInputAction::AuthUsername, "Username:");
        (w, modal)
    }

    fn prompt(&self, action: TextInputAction, label: &str) -> Modal {
        let mut lines = vec![label.to_string()];
        if !self.username.is_empty() {
            lines.insert(0, format!("user: {}", self.username));
        }
        Modal::text_input(self.mode.title(), lines, action, None)
    }

    pub(super) fn advance(&mut self, action: &TextInputAction, value: String) -> Option<AuthStep> {
        match action {
            TextInputAction::AuthUsername => {
                self.username = value.trim().to_string();
                Some(AuthStep::Next(match self.mode {
                    AuthMode::Login => self.prompt(TextInputAction::AuthPassword, "Password:"),
                    AuthMode::Register => self.prompt(TextInputAction::AuthEmail, "Email:"),
                }))
            }
            TextInputAction::AuthEmail => {
                self.email = value.trim().to_string();
                Some(AuthStep::Next(
                    self.prompt(TextInputAction::AuthPassword, "Password:"),
                ))
            }
            TextInputAction::AuthPassword => Some(AuthStep::Submit(self.credentials(value))),
            _ => None,
        }
    }

    /// Asks for the password again after a failed attempt.
    pub(super) fn retry_password(&self, error: &str) -> Modal {
        let mut modal = self.prompt(TextInputAction::AuthPassword, "Password:");
        modal.set_error(error);
        modal
    }

    fn credentials(&self, password: String) -> Credentials {
        match self.mode {
            AuthMode::Login => Credentials::Login(LoginRequest {
                username: self.username.clone(),
                password,
            }),
            AuthMode::Register => Credentials::Register(RegisterRequest {
                username: self.username.clone(),
                email: self.email.clone(),
                password,
            }),
        }
    }
}
