use checklist::remote::{LoginRequest, RegisterRequest};
use checklist::session::{Credentials, LoginError};

use super::prompt::password_or_prompt;
use super::*;

fn authenticate(ctx: &CliContext, credentials: Credentials) -> Result<()> {
    let client = ctx.client()?;
    let mut ctl = ctx.controller()?;
    match ctl.authenticate(&client, &credentials) {
        Ok(()) => Ok(()),
        Err(LoginError::Gateway(err)) => gateway(Err(err)),
        Err(LoginError::Persist(err)) => Err(err.context("store session token")),
    }
}

pub(super) fn handle_register_command(
    ctx: &CliContext,
    username: String,
    email: String,
    password: Option<String>,
) -> Result<()> {
    let password = password_or_prompt(password)?;
    authenticate(
        ctx,
        Credentials::Register(RegisterRequest {
            username: username.clone(),
            email,
            password,
        }),
    )?;
    println!("Registered and logged in as {}", username);
    Ok(())
}

pub(super) fn handle_login_command(
    ctx: &CliContext,
    username: String,
    password: Option<String>,
) -> Result<()> {
    let password = password_or_prompt(password)?;
    authenticate(
        ctx,
        Credentials::Login(LoginRequest {
            username: username.clone(),
            password,
        }),
    )?;
    println!("Logged in as {}", username);
    Ok(())
}

pub(super) fn handle_logout_command(ctx: &CliContext) -> Result<()> {
    let mut ctl = ctx.controller()?;
    ctl.logout().context("clear stored session")?;
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_status_command(ctx: &CliContext, json: bool) -> Result<()> {
    let ctl = ctx.controller()?;
    let logged_in = ctl.session().is_some();
    if json {
        print_json(
            &serde_json::json!({
                "view": ctl.view().label(),
                "logged_in": logged_in,
                "base_url": ctx.config.base_url,
                "data_dir": ctx.store.root().display().to_string(),
            }),
            "status",
        )?;
    } else {
        println!("view: {}", ctl.view().label());
        println!("logged_in: {}", logged_in);
        println!("base_url: {}", ctx.config.base_url);
        println!("data_dir: {}", ctx.store.root().display());
    }
    Ok(())
}
