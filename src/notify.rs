//! Uniform "operation failed" channel shared by every collection view.

use std::collections::VecDeque;

use crate::remote::{ErrorKind, GatewayError, Operation};

const MAX_NOTICES: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub operation: Option<Operation>,
    pub kind: Option<ErrorKind>,
    pub message: String,
    pub at: String,
}

#[derive(Debug, Default)]
pub struct Notices {
    entries: VecDeque<Notice>,
}

impl Notices {
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notice {
            level: NoticeLevel::Info,
            operation: None,
            kind: None,
            message: message.into(),
            at: now_ts(),
        });
    }

    pub fn failed(&mut self, err: &GatewayError) {
        tracing::warn!(
            operation = %err.operation,
            kind = %err.kind,
            detail = %err.detail,
            "{}",
            err.message
        );
        self.push(Notice {
            level: NoticeLevel::Failure,
            operation: Some(err.operation),
            kind: Some(err.kind),
            message: describe(err),
            at: now_ts(),
        });
    }

    /// Routes the error half of `res` into the channel and hands back the value.
    pub fn report<T>(&mut self, res: Result<T, GatewayError>) -> Option<T> {
        match res {
            Ok(v) => Some(v),
            Err(err) => {
                self.failed(&err);
                None
            }
        }
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Notice> {
        self.entries
            .iter()
            .filter(|n| n.level == NoticeLevel::Failure)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, notice: Notice) {
        if self.entries.len() == MAX_NOTICES {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }
}

/// User-facing text for a failure.
pub fn describe(err: &GatewayError) -> String {
    let mut message = err.message.to_string();
    // Tokens are never validated up front; an auth failure is how expiry shows up.
    if err.is_auth() && err.operation.requires_auth() {
        message.push_str(" (session expired? log out and sign in again)");
    }
    message
}

pub(crate) fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}
