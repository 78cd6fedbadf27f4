pub mod checklists;
pub mod confirm;
pub mod items;
pub mod logging;
pub mod model;
pub mod notify;
pub mod remote;
pub mod session;
pub mod store;
pub mod tui;

mod tui_shell;

#[cfg(test)]
mod tests {
    pub(crate) mod fake_gateway;
}
