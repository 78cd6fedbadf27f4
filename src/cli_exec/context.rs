use std::path::PathBuf;

use checklist::model::ClientConfig;
use checklist::session::SessionController;
use checklist::store::{FileSessionStore, LocalStore};

use super::*;

pub(crate) struct CliContext {
    pub(super) store: LocalStore,
    pub(super) config: ClientConfig,
}

impl CliContext {
    pub(crate) fn open(data_dir: Option<PathBuf>, url: Option<&str>) -> Result<Self> {
        let root = LocalStore::resolve_root(data_dir)?;
        let store = LocalStore::open(&root)?;
        let config = store.effective_config(url)?;
        tracing::debug!(
            data_dir = %root.display(),
            base_url = %config.base_url,
            "cli context"
        );
        Ok(Self { store, config })
    }

    pub(super) fn client(&self) -> Result<RemoteClient> {
        RemoteClient::new(&self.config)
    }

    /// Controller with any persisted session already restored.
    pub(super) fn controller(&self) -> Result<SessionController<FileSessionStore>> {
        let mut ctl = SessionController::new(FileSessionStore::new(self.store.clone()));
        ctl.restore_session().context("restore session")?;
        Ok(ctl)
    }

    pub(super) fn require_session(&self) -> Result<Session> {
        let ctl = self.controller()?;
        ctl.session()
            .cloned()
            .context("not logged in (run `checklist login --username ...`)")
    }
}
