//! Authentication commands.

use super::{reported, Context};
use crate::output::{self, OutputFormat};
use anyhow::{bail, Result};
use serde_json::json;
use std::io::{self, Write};

fn prompt_line(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Login with username and password, prompting for whatever is missing.
pub async fn login(ctx: &Context, name: Option<String>, password: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompt_line("Username")?,
    };
    if name.is_empty() {
        bail!("Username is required");
    }

    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };
    if password.is_empty() {
        bail!("Password is required");
    }

    let response = ctx.api.login(&name, &password).await;
    reported(response.success)
}

/// Logout and clear the stored credential.
pub async fn logout(ctx: &Context) -> Result<()> {
    ctx.api.logout().await;
    Ok(())
}

/// Show where the client points and whether the session is still valid.
pub async fn status(ctx: &Context) -> Result<()> {
    let session = ctx.api.session();
    let has_credential = session.has_credential()?;
    let valid = has_credential && ctx.api.check_login().await;
    let last_tag = session.get_last_tag()?;

    match ctx.format {
        OutputFormat::Text => {
            output::print_row("API", &ctx.config.api_url);
            output::print_row("Data dir", &ctx.paths.base_dir().display().to_string());
            let auth = match (has_credential, valid) {
                (false, _) => "not logged in",
                (true, true) => "logged in",
                (true, false) => "credential rejected",
            };
            output::print_row("Auth", auth);
            output::print_row("Last tag", last_tag.as_deref().unwrap_or("-"));
        }
        OutputFormat::Json => output::print_json(&json!({
            "api_url": ctx.config.api_url,
            "data_dir": ctx.paths.base_dir(),
            "has_credential": has_credential,
            "logged_in": valid,
            "last_tag": last_tag,
        })),
    }
    Ok(())
}
