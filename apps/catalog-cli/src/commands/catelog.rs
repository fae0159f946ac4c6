//! Category management commands.

use super::{reported, Context, Reported};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use catalog_search::{order_categories, visible_categories};
use catalog_types::NewCategory;

/// List categories in display order.
pub async fn catelog_list(ctx: &Context, all: bool) -> Result<()> {
    let data = ctx.admin_data().await?;
    let catelogs = if all {
        order_categories(&data.catelogs)
    } else {
        visible_categories(&data.catelogs)
    };

    match ctx.format {
        OutputFormat::Text => {
            if catelogs.is_empty() {
                println!("No categories found");
                return Ok(());
            }
            println!("{:<8} {:<24} {:<6} {}", "ID", "Name", "Sort", "Hidden");
            output::print_divider();
            for c in &catelogs {
                println!(
                    "{:<8} {:<24} {:<6} {}",
                    c.id,
                    output::truncate(&c.name, 24),
                    c.sort.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
                    if c.hide.unwrap_or(false) { "yes" } else { "no" }
                );
            }
        }
        OutputFormat::Json => output::print_json(&catelogs),
    }
    Ok(())
}

pub async fn catelog_add(ctx: &Context, category: NewCategory) -> Result<()> {
    let created = ctx.api.add_catelog(&category).await.ok_or(Reported)?;
    if ctx.format == OutputFormat::Json {
        output::print_json(&created);
    }
    Ok(())
}

pub async fn catelog_update(ctx: &Context, id: &str, category: NewCategory) -> Result<()> {
    reported(ctx.api.update_catelog(id, &category).await)
}

pub async fn catelog_delete(ctx: &Context, id: &str) -> Result<()> {
    reported(ctx.api.delete_catelog(id).await)
}
