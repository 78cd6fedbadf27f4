use super::*;

pub(super) fn handle_config_command(ctx: &CliContext, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            if json {
                print_json(&ctx.config, "config")?;
            } else {
                println!("base_url: {}", ctx.config.base_url);
                match ctx.config.request_timeout_secs {
                    Some(secs) => println!("request_timeout_secs: {}", secs),
                    None => println!("request_timeout_secs: (none)"),
                }
                println!("data_dir: {}", ctx.store.root().display());
            }
        }
        ConfigCommands::Set { base_url, timeout } => {
            if base_url.is_none() && timeout.is_none() {
                anyhow::bail!("nothing to set (pass --base-url and/or --timeout)");
            }
            // Edit the file itself, not the flag/env-adjusted view.
            let mut cfg = ctx.store.read_config()?;
            if let Some(url) = base_url {
                let url = url.trim().trim_end_matches('/');
                if url.is_empty() {
                    anyhow::bail!("base url cannot be empty");
                }
                cfg.base_url = url.to_string();
            }
            if let Some(secs) = timeout {
                cfg.request_timeout_secs = (secs > 0).then_some(secs);
            }
            ctx.store.write_config(&cfg)?;
            println!("Config updated");
        }
    }
    Ok(())
}
