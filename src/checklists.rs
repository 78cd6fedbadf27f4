//! Checklist Collection View: the session's checklists and the operations on
//! them. The local list is a cache; every entry comes from a service response.

use crate::confirm::{Confirm, Removal};
use crate::model::{Checklist, RecordId, Session};
use crate::remote::{Gateway, GatewayError, Operation};
use crate::session::SessionController;
use crate::store::SessionStore;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this checklist?";

#[derive(Debug)]
pub struct ChecklistCollection {
    checklists: Vec<Checklist>,
    loading: bool,
}

impl Default for ChecklistCollection {
    fn default() -> Self {
        Self {
            checklists: Vec::new(),
            loading: true,
        }
    }
}

impl ChecklistCollection {
    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn get(&self, id: &RecordId) -> Option<&Checklist> {
        self.checklists.iter().find(|c| &c.id == id)
    }

    /// "1 checklist" / "N checklists".
    pub fn count_label(&self) -> String {
        let n = self.checklists.len();
        format!("{} {}", n, if n == 1 { "checklist" } else { "checklists" })
    }

    /// Loads the full list. On failure the cached list is left as it was
    /// (empty on first activation) and loading still ends.
    pub fn activate<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        session: &Session,
    ) -> Result<(), GatewayError> {
        self.loading = true;
        let res = gateway.list_checklists(session);
        self.loading = false;
        self.checklists = res?;
        tracing::debug!(count = self.checklists.len(), "checklists loaded");
        Ok(())
    }

    /// Appends the service's record. Blank names are rejected before any
    /// request; repeated submits are not de-duplicated.
    pub fn create<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        session: &Session,
        name: &str,
    ) -> Result<&Checklist, GatewayError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GatewayError::validation(
                Operation::CreateChecklist,
                "Checklist name cannot be empty",
            ));
        }
        let created = gateway.create_checklist(session, name)?;
        tracing::info!(checklist = %created.id, "checklist created");
        self.checklists.push(created);
        Ok(&self.checklists[self.checklists.len() - 1])
    }

    pub fn delete<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        session: &Session,
        id: &RecordId,
        confirm: &mut dyn Confirm,
    ) -> Result<Removal, GatewayError> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(Removal::Cancelled);
        }
        gateway.delete_checklist(session, id)?;
        self.checklists.retain(|c| &c.id != id);
        tracing::info!(checklist = %id, "checklist deleted");
        Ok(Removal::Removed)
    }

    /// Navigation only; no request is made.
    pub fn select<S: SessionStore>(
        &self,
        controller: &mut SessionController<S>,
        id: RecordId,
    ) -> bool {
        controller.open_checklist(id)
    }
}

#[cfg(test)]
#[path = "tests/checklists_tests.rs"]
mod tests;
