//! Checklist collection endpoints.

use super::types::CreateChecklistRequest;
use super::*;

impl RemoteClient {
    pub fn list_checklists(&self, session: &Session) -> Result<Vec<Checklist>, GatewayError> {
        self.execute_envelope(
            Operation::ListChecklists,
            self.authed(reqwest::Method::GET, &["checklist"], session),
        )
    }

    pub fn create_checklist(
        &self,
        session: &Session,
        name: &str,
    ) -> Result<Checklist, GatewayError> {
        self.execute_envelope(
            Operation::CreateChecklist,
            self.authed(reqwest::Method::POST, &["checklist"], session)
                .json(&CreateChecklistRequest { name }),
        )
    }

    /// The acknowledgement body is ignored.
    pub fn delete_checklist(
        &self,
        session: &Session,
        checklist_id: &RecordId,
    ) -> Result<(), GatewayError> {
        self.execute(
            Operation::DeleteChecklist,
            self.authed(
                reqwest::Method::DELETE,
                &["checklist", checklist_id.to_string().as_str()],
                session,
            ),
        )?;
        Ok(())
    }
}
