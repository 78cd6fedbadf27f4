use std::process::Command;

use anyhow::{Context, Result};

fn run_checklist(args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_checklist"))
        .args(args)
        .output()
        .with_context(|| format!("run checklist {:?}", args))?;

    if !out.status.success() {
        anyhow::bail!(
            "checklist {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

#[test]
fn cli_help_surface_is_stable() -> Result<()> {
    let help = run_checklist(&["--help"])?;
    assert!(help.contains("Usage: checklist"));
    assert!(help.contains("[COMMAND]"));
    for cmd in ["login", "register", "logout", "lists", "items", "done", "rename", "config"] {
        assert!(help.contains(cmd), "missing {} in help", cmd);
    }

    let config_help = run_checklist(&["config", "--help"])?;
    // Global flags put `[OPTIONS]` between the subcommand and `<COMMAND>`.
    assert!(config_help.contains("Usage: checklist config"));
    assert!(config_help.contains("<COMMAND>"));
    assert!(config_help.contains("show"));
    assert!(config_help.contains("set"));

    Ok(())
}
