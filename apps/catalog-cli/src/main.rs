//! Catalog CLI - browse and administer a tool catalog.

mod commands;
mod host;
mod output;

use anyhow::Result;
use catalog_config::{Config, Paths};
use catalog_types::{NewCategory, Settings, UserUpdate};
use clap::{Parser, Subcommand};
use commands::{Context, Reported, ToolFields};
use std::path::PathBuf;

/// Catalog CLI - search the catalog and manage tools, categories and tokens.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Command-line client for a tool catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error); defaults to the config file
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Login with username and password
    Login {
        /// Username; prompted when omitted
        #[arg(short, long)]
        username: Option<String>,
        /// Password; prompted without echo when omitted
        #[arg(long, env = "CATALOG_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Logout and clear the stored credential
    Logout,

    /// Show API address and session state
    Status,

    /// Search the public listing
    Search {
        /// Text to match against name, description and URL
        #[arg(default_value = "")]
        query: String,
        /// Category filter; remembered for the next search
        #[arg(short, long)]
        tag: Option<String>,
        /// Print only the URL of the n-th result (1-based)
        #[arg(short, long)]
        pick: Option<usize>,
    },

    /// Manage tools
    Tools {
        #[command(subcommand)]
        command: ToolCommands,
    },

    /// Manage categories
    Catelog {
        #[command(subcommand)]
        command: CatelogCommands,
    },

    /// Manage API tokens
    Tokens {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Manage the admin account
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage site settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum ToolCommands {
    /// List tools in admin order
    List {
        /// Filter by name or description
        #[arg(short, long, default_value = "")]
        query: String,
        /// Filter by category
        #[arg(short, long)]
        catelog: Option<String>,
    },
    /// Add a tool
    Add {
        #[command(flatten)]
        fields: ToolFields,
    },
    /// Update fields of a tool
    Update {
        /// Tool ID
        id: String,
        #[command(flatten)]
        fields: ToolFields,
    },
    /// Delete one or more tools
    Delete {
        /// Tool IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Export all tools as JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import tools from a JSON file
    Import {
        /// JSON file containing an array of tools
        file: PathBuf,
    },
    /// Reorder tools: the given IDs first, the rest after
    Sort {
        /// Tool IDs in the desired order
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Move a tool to the position of another
    Move {
        /// Tool to move
        id: String,
        /// Tool whose position it takes
        over: String,
    },
    /// Clear logos so the server fetches them again
    ResetLogo {
        /// Tool IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand)]
enum CatelogCommands {
    /// List categories in display order
    List {
        /// Include hidden categories
        #[arg(short, long)]
        all: bool,
    },
    /// Add a category
    Add {
        name: String,
        #[arg(long)]
        sort: Option<i64>,
        #[arg(long)]
        hide: Option<bool>,
    },
    /// Update a category
    Update {
        /// Category ID
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        sort: Option<i64>,
        #[arg(long)]
        hide: Option<bool>,
    },
    /// Delete a category
    Delete {
        /// Category ID
        id: String,
    },
}

#[derive(Subcommand)]
enum TokenCommands {
    /// List API tokens
    List,
    /// Create an API token
    Create,
    /// Delete an API token
    Delete {
        /// Token ID
        id: String,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Change username or password
    Update {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        old_password: Option<String>,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Change site settings
    Update {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        favicon: Option<String>,
        #[arg(long)]
        gov_record: Option<String>,
        #[arg(long)]
        hide_github: Option<bool>,
    },
}

async fn run(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Login { username, password } => commands::login(ctx, username, password).await,
        Commands::Logout => commands::logout(ctx).await,
        Commands::Status => commands::status(ctx).await,
        Commands::Search { query, tag, pick } => commands::search(ctx, &query, tag, pick).await,
        Commands::Tools { command } => match command {
            ToolCommands::List { query, catelog } => {
                commands::tools_list(ctx, &query, catelog.as_deref()).await
            }
            ToolCommands::Add { fields } => commands::tools_add(ctx, fields).await,
            ToolCommands::Update { id, fields } => commands::tools_update(ctx, &id, fields).await,
            ToolCommands::Delete { ids } => commands::tools_delete(ctx, &ids).await,
            ToolCommands::Export { output } => {
                commands::tools_export(ctx, output.as_deref()).await
            }
            ToolCommands::Import { file } => commands::tools_import(ctx, &file).await,
            ToolCommands::Sort { ids } => commands::tools_sort(ctx, &ids).await,
            ToolCommands::Move { id, over } => commands::tools_move(ctx, &id, &over).await,
            ToolCommands::ResetLogo { ids } => commands::tools_reset_logo(ctx, &ids).await,
        },
        Commands::Catelog { command } => match command {
            CatelogCommands::List { all } => commands::catelog_list(ctx, all).await,
            CatelogCommands::Add { name, sort, hide } => {
                commands::catelog_add(ctx, NewCategory { name, sort, hide }).await
            }
            CatelogCommands::Update {
                id,
                name,
                sort,
                hide,
            } => commands::catelog_update(ctx, &id, NewCategory { name, sort, hide }).await,
            CatelogCommands::Delete { id } => commands::catelog_delete(ctx, &id).await,
        },
        Commands::Tokens { command } => match command {
            TokenCommands::List => commands::tokens_list(ctx).await,
            TokenCommands::Create => commands::tokens_create(ctx).await,
            TokenCommands::Delete { id } => commands::tokens_delete(ctx, &id).await,
        },
        Commands::User { command } => match command {
            UserCommands::Update {
                username,
                password,
                old_password,
            } => {
                let update = UserUpdate {
                    username,
                    password,
                    old_password,
                };
                commands::user_update(ctx, update).await
            }
        },
        Commands::Settings { command } => match command {
            SettingsCommands::Update {
                title,
                favicon,
                gov_record,
                hide_github,
            } => {
                let settings = Settings {
                    hide_github,
                    favicon,
                    title,
                    gov_record,
                };
                commands::settings_update(ctx, settings).await
            }
        },
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let format = cli.format;

    let setup = Paths::new()
        .map_err(anyhow::Error::from)
        .and_then(|paths| {
            paths.ensure_dirs()?;
            Ok((Config::load(&paths)?, paths))
        });
    let (config, paths) = match setup {
        Ok(loaded) => loaded,
        Err(e) => {
            output::print_error(&format!("{e:#}"), format);
            std::process::exit(1);
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level).to_string();
    catalog_config::init_logging("catalog-cli", &level, &paths, false);
    tracing::debug!(api_url = %config.api_url, "starting");

    let result = match Context::new(&paths, config, format) {
        Ok(ctx) => run(cli.command, &ctx).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        if !e.is::<Reported>() {
            tracing::error!(error = %e, "command failed");
            output::print_error(&format!("{e:#}"), format);
        }
        std::process::exit(1);
    }
}
