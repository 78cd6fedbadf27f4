use anyhow::{Context, Result};

use checklist::model::{RecordId, Session};
use checklist::remote::{GatewayError, RemoteClient};

use crate::{Commands, ConfigCommands};

mod config;
mod context;
mod dispatch;
mod items;
mod lists;
mod prompt;
mod session;

pub(crate) use self::context::CliContext;

pub(crate) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    dispatch::handle_command(ctx, command)
}

/// Turns a gateway failure into the CLI's error: the user-facing message,
/// with the transport or status detail underneath.
fn gateway<T>(res: Result<T, GatewayError>) -> Result<T> {
    res.map_err(|err| {
        tracing::debug!(
            operation = %err.operation,
            kind = %err.kind,
            "gateway call failed"
        );
        let message = checklist::notify::describe(&err);
        if err.detail.is_empty() {
            anyhow::Error::msg(message)
        } else {
            anyhow::Error::msg(err.detail).context(message)
        }
    })
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}

fn parse_id(raw: &str, what: &str) -> Result<RecordId> {
    let id = RecordId::parse(raw);
    if !id.is_valid() {
        anyhow::bail!("invalid {} id: {:?}", what, raw);
    }
    Ok(id)
}
