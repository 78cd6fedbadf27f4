use crate::items::ItemCollection;

use super::*;

impl App {
    pub(in crate::tui_shell) fn load(opts: crate::tui::TuiRunOptions) -> Result<Self> {
        let root = LocalStore::resolve_root(opts.data_dir)?;
        let store = LocalStore::open(&root)?;
        crate::logging::init_file(&store.log_path())?;

        let config = store.effective_config(opts.url.as_deref())?;
        let client = RemoteClient::new(&config)?;
        let mut controller = SessionController::new(FileSessionStore::new(store));
        controller
            .restore_session()
            .context("restore persisted session")?;
        tracing::info!(
            base_url = %client.base_url(),
            view = controller.view().label(),
            "tui starting"
        );

        let welcome = WelcomeView::new(client.base_url());
        let mut app = Self {
            client,
            controller,
            notices: Notices::default(),
            view: Box::new(welcome),
            needs_load: false,
            modal: None,
            auth_wizard: None,
            quit: false,
        };
        app.sync_view();
        Ok(app)
    }

    /// Rebuilds the active view when the controller has navigated elsewhere.
    /// The new view starts in its loading state; the event loop fetches its
    /// data after the next draw.
    pub(in crate::tui_shell) fn sync_view(&mut self) {
        let target = self.controller.view();
        if self.view.kind() == target && !self.view_is_stale() {
            return;
        }

        self.view = match target {
            session::View::Anonymous => Box::new(WelcomeView::new(self.client.base_url())),
            session::View::ChecklistList => Box::new(ChecklistsView::default()),
            session::View::ItemList => {
                let Some(id) = self.controller.selected_checklist().cloned() else {
                    self.controller.close_checklist();
                    return self.sync_view();
                };
                // The label comes from the checklist cache; nothing extra is fetched.
                let label = self
                    .current_view::<ChecklistsView>()
                    .and_then(|v| v.collection.get(&id))
                    .map(|c| c.name.clone());
                Box::new(ItemsView::new(ItemCollection::new(id, label.as_deref())))
            }
        };
        self.needs_load = target != session::View::Anonymous;
        tracing::debug!(view = target.label(), "view changed");
    }

    // An item view for a different checklist than the one now selected.
    fn view_is_stale(&self) -> bool {
        match self.current_view::<ItemsView>() {
            Some(v) => Some(v.collection.checklist_id()) != self.controller.selected_checklist(),
            None => false,
        }
    }

    /// Fetches data for the active view; failures go to the notice channel.
    pub(in crate::tui_shell) fn load_active_view(&mut self) {
        self.needs_load = false;
        let Some(session) = self.controller.session().cloned() else {
            return;
        };

        let res = if let Some(v) = self.view.as_any_mut().downcast_mut::<ChecklistsView>() {
            let res = v.collection.activate(&self.client, &session);
            v.after_reload();
            res
        } else if let Some(v) = self.view.as_any_mut().downcast_mut::<ItemsView>() {
            let res = v.collection.activate(&self.client, &session);
            v.after_reload();
            res
        } else {
            Ok(())
        };
        self.notices.report(res);
    }
}
