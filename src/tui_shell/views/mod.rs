pub(super) mod checklists;
pub(super) mod items;
pub(super) mod welcome;

pub(in crate::tui_shell) use checklists::ChecklistsView;
pub(in crate::tui_shell) use items::ItemsView;
pub(in crate::tui_shell) use welcome::WelcomeView;
