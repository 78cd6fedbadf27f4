//! Session Controller: which view is active, who is signed in, and which
//! checklist is open.

use anyhow::Result;

use crate::model::{RecordId, Session};
use crate::remote::{
    Gateway, GatewayError, LoginRequest, Operation, RegisterRequest, extract_token,
};
use crate::store::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Anonymous,
    ChecklistList,
    ItemList,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Anonymous => "anonymous",
            View::ChecklistList => "checklist-list",
            View::ItemList => "item-list",
        }
    }
}

/// What the login form submits; registration also needs an email.
#[derive(Clone, Debug)]
pub enum Credentials {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl Credentials {
    pub fn operation(&self) -> Operation {
        match self {
            Credentials::Login(_) => Operation::Login,
            Credentials::Register(_) => Operation::Register,
        }
    }

    fn validate(&self) -> Result<(), GatewayError> {
        let op = self.operation();
        let (username, password, email) = match self {
            Credentials::Login(r) => (&r.username, &r.password, None),
            Credentials::Register(r) => (&r.username, &r.password, Some(&r.email)),
        };
        if username.trim().is_empty() {
            return Err(GatewayError::validation(op, "Username is required"));
        }
        if email.is_some_and(|e| e.trim().is_empty()) {
            return Err(GatewayError::validation(op, "Email is required"));
        }
        if password.is_empty() {
            return Err(GatewayError::validation(op, "Password is required"));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("save session: {0:#}")]
    Persist(anyhow::Error),
}

pub struct SessionController<S> {
    store: S,
    view: View,
    session: Option<Session>,
    selected_checklist: Option<RecordId>,
}

impl<S: SessionStore> SessionController<S> {
    /// Starts anonymous; call [`Self::restore_session`] to pick up a saved token.
    pub fn new(store: S) -> Self {
        Self {
            store,
            view: View::Anonymous,
            session: None,
            selected_checklist: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn selected_checklist(&self) -> Option<&RecordId> {
        self.selected_checklist.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adopts a persisted token without contacting the service; a stale
    /// token only shows up when the next authenticated call fails.
    pub fn restore_session(&mut self) -> Result<()> {
        if let Some(token) = self.store.load()? {
            self.session = Some(Session::new(token));
            self.view = View::ChecklistList;
            tracing::info!("restored persisted session");
        }
        Ok(())
    }

    pub fn complete_login(&mut self, token: &str) -> Result<()> {
        self.store.save(token)?;
        self.session = Some(Session::new(token));
        self.selected_checklist = None;
        self.view = View::ChecklistList;
        tracing::info!(view = self.view.label(), "login complete");
        Ok(())
    }

    /// Submits credentials and, when a token comes back, completes the login.
    /// Any failure leaves the controller untouched.
    pub fn authenticate<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        credentials: &Credentials,
    ) -> Result<(), LoginError> {
        credentials.validate()?;
        let op = credentials.operation();
        let payload = match credentials {
            Credentials::Login(req) => gateway.login(req)?,
            Credentials::Register(req) => gateway.register(req)?,
        };
        let Some(token) = extract_token(&payload) else {
            tracing::warn!(operation = %op, "auth response carried no token");
            return Err(GatewayError::missing_token(op).into());
        };
        self.complete_login(&token).map_err(LoginError::Persist)
    }

    /// Always ends anonymous, even if the persisted token cannot be removed.
    pub fn logout(&mut self) -> Result<()> {
        self.session = None;
        self.selected_checklist = None;
        self.view = View::Anonymous;
        tracing::info!("logged out");
        self.store.clear()
    }

    /// Returns false (and changes nothing) when no session is active.
    pub fn open_checklist(&mut self, id: RecordId) -> bool {
        if self.session.is_none() {
            tracing::warn!(checklist = %id, "open checklist without a session");
            return false;
        }
        tracing::debug!(checklist = %id, "open checklist");
        self.selected_checklist = Some(id);
        self.view = View::ItemList;
        true
    }

    pub fn close_checklist(&mut self) {
        self.selected_checklist = None;
        if self.session.is_some() {
            self.view = View::ChecklistList;
        }
    }
}
