use crate::confirm::Removal;
use crate::items::ItemCollection;
use crate::model::Session;
use crate::remote::{ErrorKind, Gateway, GatewayError, Operation};
use crate::{checklists, items};

use super::*;

impl App {
    fn require_session(&mut self, op: Operation) -> Option<Session> {
        let session = self.controller.session().cloned();
        if session.is_none() {
            self.notices
                .failed(&GatewayError::new(ErrorKind::Auth, op, "no active session"));
        }
        session
    }

    pub(in crate::tui_shell) fn reload(&mut self) {
        self.needs_load = true;
    }

    pub(in crate::tui_shell) fn logout(&mut self) {
        self.auth_wizard = None;
        if let Err(err) = self.controller.logout() {
            tracing::warn!(error = %format!("{:#}", err), "clear stored token");
            self.push_info(format!("logged out (stored token not cleared: {:#})", err));
        } else {
            self.push_info("logged out");
        }
        self.sync_view();
    }

    pub(in crate::tui_shell) fn open_selected_checklist(&mut self) {
        let Some(id) = self
            .current_view::<ChecklistsView>()
            .and_then(|v| v.selected_checklist())
            .map(|c| c.id.clone())
        else {
            return;
        };
        if let Some(v) = self.view.as_any().downcast_ref::<ChecklistsView>() {
            v.collection.select(&mut self.controller, id);
        }
        self.sync_view();
    }

    pub(in crate::tui_shell) fn back_to_checklists(&mut self) {
        self.controller.close_checklist();
        self.sync_view();
    }

    pub(in crate::tui_shell) fn create_checklist(&mut self, name: &str) {
        let Some(session) = self.require_session(Operation::CreateChecklist) else {
            return;
        };
        let Some(v) = self.view.as_any_mut().downcast_mut::<ChecklistsView>() else {
            return;
        };
        let res = v
            .collection
            .create(&self.client, &session, name)
            .map(|c| c.name.clone());
        if res.is_ok() {
            v.select_last();
        }
        if let Some(name) = self.notices.report(res) {
            self.push_info(format!("created checklist \"{}\"", name));
        }
    }

    pub(in crate::tui_shell) fn create_item(&mut self, name: &str) {
        let Some(session) = self.require_session(Operation::CreateItem) else {
            return;
        };
        let Some(v) = self.view.as_any_mut().downcast_mut::<ItemsView>() else {
            return;
        };
        let res = v
            .collection
            .create(&self.client, &session, name)
            .map(|i| i.name.clone());
        if res.is_ok() {
            v.select_last();
        }
        if let Some(name) = self.notices.report(res) {
            self.push_info(format!("added \"{}\"", name));
        }
    }

    pub(in crate::tui_shell) fn toggle_selected_item(&mut self) {
        let Some(session) = self.require_session(Operation::UpdateItemStatus) else {
            return;
        };
        let Some(v) = self.view.as_any_mut().downcast_mut::<ItemsView>() else {
            return;
        };
        let Some((id, status)) = v
            .selected_item()
            .map(|i| (i.id.clone(), !i.item_completion_status))
        else {
            return;
        };
        let res = v
            .collection
            .toggle_completion(&self.client, &session, &id, status);
        self.notices.report(res);
    }

    /// Opens the rename modal pre-filled with the item's current name.
    pub(in crate::tui_shell) fn start_rename_selected(&mut self) {
        let Some(v) = self.current_view_mut::<ItemsView>() else {
            return;
        };
        let Some(id) = v.selected_item().map(|i| i.id.clone()) else {
            return;
        };
        if !v.collection.start_edit(&id) {
            return;
        }
        let draft = v.collection.editing().map(|e| e.draft.clone());
        self.open_modal(Modal::text_input(
            "Rename item",
            vec!["New name:".to_string()],
            TextInputAction::RenameItem,
            draft,
        ));
    }

    pub(in crate::tui_shell) fn commit_rename(&mut self, value: String) {
        let Some(session) = self.require_session(Operation::RenameItem) else {
            return;
        };
        let Some(v) = self.view.as_any_mut().downcast_mut::<ItemsView>() else {
            return;
        };
        match commit_rename_in(&mut v.collection, &self.client, &session, value) {
            Ok(_) => self.push_info("item renamed"),
            Err((err, modal)) => {
                self.notices.failed(&err);
                self.open_modal(modal);
            }
        }
    }

    pub(in crate::tui_shell) fn cancel_rename(&mut self) {
        if let Some(v) = self.current_view_mut::<ItemsView>() {
            v.collection.cancel_edit();
        }
    }

    pub(in crate::tui_shell) fn confirm_delete_selected(&mut self) {
        let modal = if let Some(v) = self.current_view::<ChecklistsView>() {
            v.selected_checklist().map(|c| {
                Modal::confirm(
                    "Delete checklist",
                    vec![
                        checklists::DELETE_PROMPT.to_string(),
                        String::new(),
                        format!("  {}", c.name),
                        String::new(),
                        "Enter: delete  Esc: cancel".to_string(),
                    ],
                    PendingAction::DeleteChecklist { id: c.id.clone() },
                )
            })
        } else if let Some(v) = self.current_view::<ItemsView>() {
            v.selected_item().map(|i| {
                Modal::confirm(
                    "Delete item",
                    vec![
                        items::DELETE_PROMPT.to_string(),
                        String::new(),
                        format!("  {}", i.name),
                        String::new(),
                        "Enter: delete  Esc: cancel".to_string(),
                    ],
                    PendingAction::DeleteItem { id: i.id.clone() },
                )
            })
        } else {
            None
        };
        if let Some(m) = modal {
            self.open_modal(m);
        }
    }

    /// Runs a destructive action the user already confirmed in a modal.
    pub(in crate::tui_shell) fn execute_action_confirmed(&mut self, action: PendingAction) {
        let mut confirmed = |_: &str| true;
        let res = match &action {
            PendingAction::DeleteChecklist { id } => {
                let Some(session) = self.require_session(Operation::DeleteChecklist) else {
                    return;
                };
                let Some(v) = self.view.as_any_mut().downcast_mut::<ChecklistsView>() else {
                    return;
                };
                let res = v
                    .collection
                    .delete(&self.client, &session, id, &mut confirmed);
                v.after_reload();
                res
            }
            PendingAction::DeleteItem { id } => {
                let Some(session) = self.require_session(Operation::DeleteItem) else {
                    return;
                };
                let Some(v) = self.view.as_any_mut().downcast_mut::<ItemsView>() else {
                    return;
                };
                let res = v
                    .collection
                    .delete(&self.client, &session, id, &mut confirmed);
                v.after_reload();
                res
            }
        };
        if let Some(Removal::Removed) = self.notices.report(res) {
            self.push_info("deleted");
        }
    }
}

fn rename_modal(draft: Option<String>) -> Modal {
    Modal::text_input(
        "Rename item",
        vec!["New name:".to_string()],
        TextInputAction::RenameItem,
        draft,
    )
}

/// Commits the open edit with `value` as its draft. On failure the edit stays
/// open and the returned modal carries the draft and the error.
pub(in crate::tui_shell) fn commit_rename_in<G: Gateway + ?Sized>(
    collection: &mut ItemCollection,
    gateway: &G,
    session: &Session,
    value: String,
) -> Result<bool, (GatewayError, Modal)> {
    if let Some(draft) = collection.edit_draft_mut() {
        *draft = value;
    }
    collection.commit_edit(gateway, session).map_err(|err| {
        let mut modal = rename_modal(collection.editing().map(|e| e.draft.clone()));
        modal.set_error(crate::notify::describe(&err));
        (err, modal)
    })
}
