//! Tool management commands.

use super::{reported, Context, Reported};
use crate::output::{self, OutputFormat};
use anyhow::{bail, Context as _, Result};
use catalog_search::{filter_admin_tools, move_tool, sort_updates};
use catalog_types::Tool;
use clap::Args;
use serde_json::Value;
use std::path::Path;

/// Editable tool fields shared by `add` and `update`.
#[derive(Debug, Clone, Default, Args)]
pub struct ToolFields {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,
    /// Link target
    #[arg(long)]
    pub url: Option<String>,
    /// Category name
    #[arg(long)]
    pub catelog: Option<String>,
    /// Short description
    #[arg(long)]
    pub desc: Option<String>,
    /// Logo URL; empty lets the server fetch one
    #[arg(long)]
    pub logo: Option<String>,
    /// Sort position
    #[arg(long)]
    pub sort: Option<i64>,
    /// Hide from the public listing
    #[arg(long)]
    pub hide: Option<bool>,
}

impl ToolFields {
    fn apply(self, tool: &mut Tool) {
        if let Some(name) = self.name {
            tool.name = name;
        }
        if let Some(url) = self.url {
            tool.url = url;
        }
        if let Some(catelog) = self.catelog {
            tool.catelog = catelog;
        }
        if let Some(desc) = self.desc {
            tool.desc = desc;
        }
        if let Some(logo) = self.logo {
            tool.logo = logo;
        }
        if self.sort.is_some() {
            tool.sort = self.sort;
        }
        if self.hide.is_some() {
            tool.hide = self.hide;
        }
    }
}

/// Admin tools in display order.
async fn ordered_tools(ctx: &Context) -> Result<Vec<Tool>> {
    let data = ctx.admin_data().await?;
    Ok(filter_admin_tools(&data.tools, "", None))
}

fn select<'a>(tools: &'a [Tool], ids: &[String]) -> Result<Vec<&'a Tool>> {
    ids.iter()
        .map(|id| {
            tools
                .iter()
                .find(|t| &t.id == id)
                .with_context(|| format!("No tool with id {id}"))
        })
        .collect()
}

/// List tools as the admin table shows them.
pub async fn tools_list(ctx: &Context, query: &str, catelog: Option<&str>) -> Result<()> {
    let data = ctx.admin_data().await?;
    let tools = filter_admin_tools(&data.tools, query, catelog);
    output::print_tools(&tools, ctx.format);
    Ok(())
}

pub async fn tools_add(ctx: &Context, fields: ToolFields) -> Result<()> {
    let (Some(name), Some(url), Some(catelog)) =
        (fields.name.clone(), fields.url.clone(), fields.catelog.clone())
    else {
        bail!("--name, --url and --catelog are required");
    };

    let mut tool = Tool::new(name, url, catelog);
    fields.apply(&mut tool);

    let created = ctx.api.add_tool(&tool).await.ok_or(Reported)?;
    if ctx.format == OutputFormat::Json {
        output::print_json(&created);
    }
    Ok(())
}

/// Update the fields given on the command line, keeping the rest.
pub async fn tools_update(ctx: &Context, id: &str, fields: ToolFields) -> Result<()> {
    let data = ctx.admin_data().await?;
    let mut tool = data
        .tools
        .into_iter()
        .find(|t| t.id == id)
        .with_context(|| format!("No tool with id {id}"))?;

    fields.apply(&mut tool);
    ctx.api.update_tool(&tool).await.ok_or(Reported)?;
    Ok(())
}

pub async fn tools_delete(ctx: &Context, ids: &[String]) -> Result<()> {
    match ids {
        [] => bail!("No tool ids given"),
        [id] => reported(ctx.api.delete_tool(id).await),
        _ => reported(ctx.api.bulk_delete_tools(ids).await == ids.len()),
    }
}

/// Write the export payload to `path`, or stdout.
pub async fn tools_export(ctx: &Context, path: Option<&Path>) -> Result<()> {
    let payload = ctx.api.export_tools().await.ok_or(Reported)?;
    let text = serde_json::to_string_pretty(&payload)?;
    match path {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "export written");
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Import a JSON array of tools exactly as read from `path`.
pub async fn tools_import(ctx: &Context, path: &Path) -> Result<()> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let payload: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    if !payload.is_array() {
        bail!("{} must contain a JSON array of tools", path.display());
    }
    reported(ctx.api.import_tools(&payload).await)
}

/// Put `ids` first, in the given order, followed by the remaining tools.
pub async fn tools_sort(ctx: &Context, ids: &[String]) -> Result<()> {
    let tools = ordered_tools(ctx).await?;
    let mut ordered: Vec<Tool> = select(&tools, ids)?.into_iter().cloned().collect();
    ordered.extend(tools.iter().filter(|t| !ids.contains(&t.id)).cloned());

    reported(ctx.api.update_tools_sort(&sort_updates(&ordered)).await)
}

/// Move one tool to the position of another.
pub async fn tools_move(ctx: &Context, id: &str, over: &str) -> Result<()> {
    let tools = ordered_tools(ctx).await?;
    let Some(moved) = move_tool(&tools, id, over) else {
        bail!("Nothing to move: both ids must exist and differ");
    };
    reported(ctx.api.update_tools_sort(&sort_updates(&moved)).await)
}

pub async fn tools_reset_logo(ctx: &Context, ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        bail!("No tool ids given");
    }
    let data = ctx.admin_data().await?;
    let selected: Vec<Tool> = select(&data.tools, ids)?.into_iter().cloned().collect();
    reported(ctx.api.bulk_reset_logos(&selected).await == selected.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str) -> Tool {
        let mut t = Tool::new(id, format!("https://{id}.example"), "Lang");
        t.id = id.to_string();
        t
    }

    #[test]
    fn test_fields_apply_only_given_values() {
        let mut t = tool("1");
        t.desc = "keep".into();
        t.sort = Some(5);

        ToolFields {
            name: Some("Renamed".into()),
            hide: Some(true),
            ..Default::default()
        }
        .apply(&mut t);

        assert_eq!(t.name, "Renamed");
        assert_eq!(t.desc, "keep");
        assert_eq!(t.sort, Some(5));
        assert_eq!(t.hide, Some(true));
    }

    #[test]
    fn test_select_preserves_requested_order() {
        let tools = vec![tool("a"), tool("b"), tool("c")];
        let picked = select(&tools, &["c".into(), "a".into()]).unwrap();
        let ids: Vec<_> = picked.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);

        assert!(select(&tools, &["x".into()]).is_err());
    }
}
