//! Item endpoints, all scoped under one checklist.

use super::types::{ItemNameRequest, ItemStatusRequest};
use super::*;

fn item_segments<'a>(checklist_id: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
    let mut segments = vec!["checklist", checklist_id, "item"];
    segments.extend_from_slice(rest);
    segments
}

impl RemoteClient {
    pub fn list_items(
        &self,
        session: &Session,
        checklist_id: &RecordId,
    ) -> Result<Vec<Item>, GatewayError> {
        self.execute_envelope(
            Operation::ListItems,
            self.authed(
                reqwest::Method::GET,
                &item_segments(&checklist_id.to_string(), &[]),
                session,
            ),
        )
    }

    pub fn create_item(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_name: &str,
    ) -> Result<Item, GatewayError> {
        self.execute_envelope(
            Operation::CreateItem,
            self.authed(
                reqwest::Method::POST,
                &item_segments(&checklist_id.to_string(), &[]),
                session,
            )
                .json(&ItemNameRequest { item_name }),
        )
    }

    pub fn update_item_status(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_id: &RecordId,
        status: bool,
    ) -> Result<Item, GatewayError> {
        let (list, item) = (checklist_id.to_string(), item_id.to_string());
        let path = item_segments(&list, &[item.as_str()]);
        self.execute_envelope(
            Operation::UpdateItemStatus,
            self.authed(reqwest::Method::PUT, &path, session)
                .json(&ItemStatusRequest {
                    item_completion_status: status,
                }),
        )
    }

    pub fn rename_item(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_id: &RecordId,
        item_name: &str,
    ) -> Result<Item, GatewayError> {
        let (list, item) = (checklist_id.to_string(), item_id.to_string());
        let path = item_segments(&list, &["rename", item.as_str()]);
        self.execute_envelope(
            Operation::RenameItem,
            self.authed(reqwest::Method::PUT, &path, session)
                .json(&ItemNameRequest { item_name }),
        )
    }

    pub fn delete_item(
        &self,
        session: &Session,
        checklist_id: &RecordId,
        item_id: &RecordId,
    ) -> Result<(), GatewayError> {
        let (list, item) = (checklist_id.to_string(), item_id.to_string());
        let path = item_segments(&list, &[item.as_str()]);
        self.execute(
            Operation::DeleteItem,
            self.authed(reqwest::Method::DELETE, &path, session),
        )?;
        Ok(())
    }
}
