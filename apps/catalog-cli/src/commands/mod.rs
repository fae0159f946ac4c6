//! CLI command implementations.

mod account;
mod auth;
mod catelog;
mod search;
mod tokens;
mod tools;

pub use account::{settings_update, user_update};
pub use auth::{login, logout, status};
pub use catelog::{catelog_add, catelog_delete, catelog_list, catelog_update};
pub use search::search;
pub use tokens::{tokens_create, tokens_delete, tokens_list};
pub use tools::{
    tools_add, tools_delete, tools_export, tools_import, tools_list, tools_move,
    tools_reset_logo, tools_sort, tools_update, ToolFields,
};

use crate::host::{TerminalNavigator, TerminalNotifier};
use crate::output::OutputFormat;
use anyhow::{Context as _, Result};
use catalog_config::{Config, Paths};
use catalog_gateway::CatalogApi;
use catalog_types::AdminData;
use std::sync::Arc;
use thiserror::Error;

/// The failure was already shown to the user through a notice.
#[derive(Debug, Error)]
#[error("command failed")]
pub struct Reported;

/// Everything a command needs.
pub struct Context {
    pub api: CatalogApi,
    pub config: Config,
    pub paths: Paths,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(paths: &Paths, config: Config, format: OutputFormat) -> Result<Self> {
        let session = catalog_storage::create_session_store(paths)
            .with_context(|| format!("opening {}", paths.session_file().display()))?;
        let api = CatalogApi::from_config(
            &config,
            session,
            Arc::new(TerminalNotifier::new(format)),
            Arc::new(TerminalNavigator::new(format)),
        )?;
        Ok(Self {
            api,
            config,
            paths: paths.clone(),
            format,
        })
    }

    /// Admin aggregate, or [`Reported`] when it could not be loaded.
    async fn admin_data(&self) -> Result<AdminData> {
        self.api.fetch_admin_data().await.ok_or_else(|| Reported.into())
    }
}

/// Map an operation's success flag onto the command result.
fn reported(ok: bool) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Reported.into())
    }
}
