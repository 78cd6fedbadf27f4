//! Failure taxonomy for gateway calls.

use std::borrow::Cow;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected locally; no request was sent.
    Validation,
    /// 401/403, or a login that produced no token.
    Auth,
    /// The request never completed (connect, DNS, reset).
    Network,
    /// Any other non-success status.
    Server,
    /// The body did not have the expected shape.
    Parse,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Auth => "auth",
            ErrorKind::Network => "network",
            ErrorKind::Server => "server",
            ErrorKind::Parse => "parse",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Register,
    Login,
    ListChecklists,
    CreateChecklist,
    DeleteChecklist,
    ListItems,
    CreateItem,
    UpdateItemStatus,
    RenameItem,
    DeleteItem,
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Operation::Register => "register",
            Operation::Login => "login",
            Operation::ListChecklists => "list checklists",
            Operation::CreateChecklist => "create checklist",
            Operation::DeleteChecklist => "delete checklist",
            Operation::ListItems => "list items",
            Operation::CreateItem => "create item",
            Operation::UpdateItemStatus => "update item status",
            Operation::RenameItem => "rename item",
            Operation::DeleteItem => "delete item",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Register => "Registration failed",
            Operation::Login => "Login failed",
            Operation::ListChecklists => "Failed to fetch checklists",
            Operation::CreateChecklist => "Failed to create checklist",
            Operation::DeleteChecklist => "Failed to delete checklist",
            Operation::ListItems => "Failed to fetch items",
            Operation::CreateItem => "Failed to create item",
            Operation::UpdateItemStatus => "Failed to update item status",
            Operation::RenameItem => "Failed to rename item",
            Operation::DeleteItem => "Failed to delete item",
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Operation::Register | Operation::Login)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed gateway call. `message` is what a user sees; `detail` carries the
/// status line or transport error for logs.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub kind: ErrorKind,
    pub operation: Operation,
    pub message: Cow<'static, str>,
    pub detail: String,
}

impl GatewayError {
    pub fn new(kind: ErrorKind, operation: Operation, detail: impl Into<String>) -> Self {
        Self {
            kind,
            operation,
            message: Cow::Borrowed(default_message(kind, operation)),
            detail: detail.into(),
        }
    }

    pub fn validation(operation: Operation, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            operation,
            message: message.into(),
            detail: String::new(),
        }
    }

    pub fn missing_token(operation: Operation) -> Self {
        Self {
            kind: ErrorKind::Auth,
            operation,
            message: Cow::Borrowed("No authentication token received from server"),
            detail: "response carried no token".to_string(),
        }
    }

    pub fn is_auth(&self) -> bool {
        self.kind == ErrorKind::Auth
    }
}

fn default_message(kind: ErrorKind, operation: Operation) -> &'static str {
    if operation.requires_auth() {
        return operation.failure_message();
    }
    match kind {
        ErrorKind::Network => "Network error. Please check your internet connection.",
        ErrorKind::Parse => "Server response error. Please check your connection.",
        _ => operation.failure_message(),
    }
}
