//! API token commands.

use super::{reported, Context, Reported};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use catalog_types::ApiToken;

pub async fn tokens_list(ctx: &Context) -> Result<()> {
    let data = ctx.admin_data().await?;
    match ctx.format {
        OutputFormat::Text => {
            if data.tokens.is_empty() {
                println!("No tokens found");
                return Ok(());
            }
            println!("{:<8} {:<24} {}", "ID", "Created", "Token");
            output::print_divider();
            for token in &data.tokens {
                println!("{:<8} {:<24} {}", token.id, token.created_at, token.token);
            }
        }
        OutputFormat::Json => output::print_json(&data.tokens),
    }
    Ok(())
}

pub async fn tokens_create(ctx: &Context) -> Result<()> {
    let created = ctx.api.add_api_token().await.ok_or(Reported)?;
    match (ctx.format, serde_json::from_value::<ApiToken>(created.clone())) {
        (OutputFormat::Text, Ok(token)) => output::print_row("Token", &token.token),
        (OutputFormat::Text, Err(_)) => {}
        (OutputFormat::Json, _) => output::print_json(&created),
    }
    Ok(())
}

pub async fn tokens_delete(ctx: &Context, id: &str) -> Result<()> {
    reported(ctx.api.delete_api_token(id).await)
}
