use anyhow::{Context, Result};

use crate::model::{Checklist, ClientConfig, Envelope, Item, RecordId, Session};

mod error;
pub use self::error::{ErrorKind, GatewayError, Operation};

mod http_client;

mod types;
pub use self::types::{LoginRequest, RegisterRequest};

mod auth;
pub use self::auth::extract_token;
mod checklists;
mod items;

/// Remote Data Gateway: one authenticated request per domain operation,
/// with the `{ data: ... }` envelope already unwrapped.
///
/// Implementations must not retry, cache, or reorder calls.
pub trait Gateway {
    /// Returns the raw auth payload; see [`extract_token`].
    fn register(&self, req: &RegisterRequest) -> Result<serde_json::Value, GatewayError>;
    fn login(&self, req: &LoginRequest) -> Result<serde_json::Value, GatewayError>;

    fn list_checklists(&self, session: &Session) -> Result<Vec<Checklist>, GatewayError>;
    fn create_checklist(&self, session: &Session, name: &str)
    -> Result<Checklist, GatewayError>;
    fn delete_checklist(&self, session: &Session, checklist_id: &RecordId)
    -> Result<(), GatewayError>;

    fn list_items(&self, session: &Session, checklist_id: &RecordId)
    -> Result<Vec<Item>, GatewayError>;
    fn create_item(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_name: &str,
    ) -> Result<Item, GatewayError>;
    fn update_item_status(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_id: &RecordId,
        status: bool,
    ) -> Result<Item, GatewayError>;
    fn rename_item(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_id: &RecordId,
        item_name: &str,
    ) -> Result<Item, GatewayError>;
    fn delete_item(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_id: &RecordId,
    ) -> Result<(), GatewayError>;
}

pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // No timeout unless configured: a hung request only stalls its own action.
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("checklist/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Gateway for RemoteClient {
    fn register(&self, req: &RegisterRequest) -> Result<serde_json::Value, GatewayError> {
        RemoteClient::register(self, req)
    }

    fn login(&self, req: &LoginRequest) -> Result<serde_json::Value, GatewayError> {
        RemoteClient::login(self, req)
    }

    fn list_checklists(&self, session: &Session) -> Result<Vec<Checklist>, GatewayError> {
        RemoteClient::list_checklists(self, session)
    }

    fn create_checklist(
        &self,
        session: &Session,
        name: &str,
    ) -> Result<Checklist, GatewayError> {
        RemoteClient::create_checklist(self, session, name)
    }

    fn delete_checklist(
        &self,
        session: &Session,
        checklist_id: &RecordId,
    ) -> Result<(), GatewayError> {
        RemoteClient::delete_checklist(self, session, checklist_id)
    }

    fn list_items(
        &self,
        session: &Session,
        checklist_id: &RecordId,
    ) -> Result<Vec<Item>, GatewayError> {
        RemoteClient::list_items(self, session, checklist_id)
    }

    fn create_item(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_name: &str,
    ) -> Result<Item, GatewayError> {
        RemoteClient::create_item(self, session, checklist_id, item_name)
    }

    fn update_item_status(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_id: &RecordId,
        status: bool,
    ) -> Result<Item, GatewayError> {
        RemoteClient::update_item_status(self, session, checklist_id, item_id, status)
    }

    fn rename_item(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_id: &RecordId,
        item_name: &str,
    ) -> Result<Item, GatewayError> {
        RemoteClient::rename_item(self, session, checklist_id, item_id, item_name)
    }

    fn delete_item(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_id: &RecordId,
    ) -> Result<(), GatewayError> {
        RemoteClient::delete_item(self, session, checklist_id, item_id)
    }
}
