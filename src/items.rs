//! Item Collection View, scoped to one checklist.
//!
//! Mutations merge the service's canonical record into the cached list by the
//! id the service returned. Completed responses win in arrival order; there is
//! no version check.

use crate::confirm::{Confirm, Removal};
use crate::model::{Item, RecordId, Session};
use crate::remote::{Gateway, GatewayError, Operation};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";
pub const PLACEHOLDER_LABEL: &str = "Checklist";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl Progress {
    pub fn of(items: &[Item]) -> Self {
        let total = items.len();
        let completed = items.iter().filter(|i| i.item_completion_status).count();
        // Rounds half up: 1 of 8 is 12.5% and shows as 13.
        let percent = if total == 0 {
            0
        } else {
            ((200 * completed + total) / (2 * total)) as u8
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    pub fn summary(&self) -> String {
        format!("{} of {} completed", self.completed, self.total)
    }
}

/// Inline rename in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditState {
    pub item_id: RecordId,
    pub draft: String,
}

#[derive(Debug)]
pub struct ItemCollection {
    checklist_id: RecordId,
    label: String,
    items: Vec<Item>,
    loading: bool,
    editing: Option<EditState>,
}

impl ItemCollection {
    /// `label` is whatever the caller already knows about the checklist's
    /// name; the view never fetches it.
    pub fn new(checklist_id: RecordId, label: Option<&str>) -> Self {
        let label = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(PLACEHOLDER_LABEL)
            .to_string();
        Self {
            checklist_id,
            label,
            items: Vec::new(),
            loading: true,
            editing: None,
        }
    }

    pub fn checklist_id(&self) -> &RecordId {
        &self.checklist_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.items)
    }

    pub fn activate<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        session: &Session,
    ) -> Result<(), GatewayError> {
        self.loading = true;
        let res = gateway.list_items(session, &self.checklist_id);
        self.loading = false;
        self.items = res?;
        tracing::debug!(
            checklist = %self.checklist_id,
            count = self.items.len(),
            "items loaded"
        );
        Ok(())
    }

    pub fn create<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        session: &Session,
        name: &str,
    ) -> Result<&Item, GatewayError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GatewayError::validation(
                Operation::CreateItem,
                "Item name cannot be empty",
            ));
        }
        let created = gateway.create_item(session, &self.checklist_id, name)?;
        tracing::info!(checklist = %self.checklist_id, item = %created.id, "item created");
        self.items.push(created);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn toggle_completion<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        session: &Session,
        item_id: &RecordId,
        status: bool,
    ) -> Result<(), GatewayError> {
        if !item_id.is_valid() {
            tracing::error!(item = %item_id, "toggle with an invalid item id");
            return Err(GatewayError::validation(
                Operation::UpdateItemStatus,
                "Invalid item id",
            ));
        }
        let updated = gateway.update_item_status(session, &self.checklist_id, item_id, status)?;
        self.replace_by_id(updated);
        Ok(())
    }

    pub fn start_edit(&mut self, item_id: &RecordId) -> bool {
        let Some(item) = self.items.iter().find(|i| &i.id == item_id) else {
            return false;
        };
        self.editing = Some(EditState {
            item_id: item.id.clone(),
            draft: item.name.clone(),
        });
        true
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut String> {
        self.editing.as_mut().map(|e| &mut e.draft)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// On failure the edit stays open so the user can retry.
    pub fn rename<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        session: &Session,
        item_id: &RecordId,
        name: &str,
    ) -> Result<(), GatewayError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GatewayError::validation(
                Operation::RenameItem,
                "Item name cannot be empty",
            ));
        }
        if !item_id.is_valid() {
            tracing::error!(item = %item_id, "rename with an invalid item id");
            return Err(GatewayError::validation(Operation::RenameItem, "Invalid item id"));
        }
        let updated = gateway.rename_item(session, &self.checklist_id, item_id, name)?;
        self.replace_by_id(updated);
        self.editing = None;
        Ok(())
    }

    /// Renames whatever is being edited, using the current draft.
    pub fn commit_edit<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        session: &Session,
    ) -> Result<bool, GatewayError> {
        let Some(edit) = self.editing.clone() else {
            return Ok(false);
        };
        self.rename(gateway, session, &edit.item_id, &edit.draft)?;
        Ok(true)
    }

    pub fn delete<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        session: &Session,
        item_id: &RecordId,
        confirm: &mut dyn Confirm,
    ) -> Result<Removal, GatewayError> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(Removal::Cancelled);
        }
        gateway.delete_item(session, &self.checklist_id, item_id)?;
        self.items.retain(|i| &i.id != item_id);
        if self.editing.as_ref().is_some_and(|e| &e.item_id == item_id) {
            self.editing = None;
        }
        tracing::info!(checklist = %self.checklist_id, item = %item_id, "item deleted");
        Ok(Removal::Removed)
    }

    // Matches on the id the service echoed back, not the id that was sent.
    fn replace_by_id(&mut self, updated: Item) {
        match self.items.iter_mut().find(|i| i.id == updated.id) {
            Some(slot) => *slot = updated,
            None => {
                tracing::warn!(item = %updated.id, "updated item not in local list");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/items_tests.rs"]
mod tests;
