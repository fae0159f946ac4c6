//! User and site settings commands.

use super::{reported, Context};
use anyhow::{bail, Result};
use catalog_types::{Settings, UserUpdate};

pub async fn user_update(ctx: &Context, update: UserUpdate) -> Result<()> {
    if update == UserUpdate::default() {
        bail!("Nothing to update");
    }
    if update.password.is_some() && update.old_password.is_none() {
        bail!("--old-password is required when changing the password");
    }
    reported(ctx.api.update_user(&update).await)
}

pub async fn settings_update(ctx: &Context, settings: Settings) -> Result<()> {
    if settings.is_empty() {
        bail!("Nothing to update");
    }
    reported(ctx.api.update_settings(&settings).await)
}
