//! Ordering for categories and drag-to-reorder of tools.

use catalog_types::{Category, Tool, ToolSortUpdate};

/// Categories by ascending `sort` (missing = 0), ties in input order.
pub fn order_categories(catelogs: &[Category]) -> Vec<Category> {
    let mut out = catelogs.to_vec();
    out.sort_by_key(|c| c.sort.unwrap_or(0));
    out
}

/// [`order_categories`] without hidden entries.
pub fn visible_categories(catelogs: &[Category]) -> Vec<Category> {
    order_categories(catelogs)
        .into_iter()
        .filter(|c| !c.hide.unwrap_or(false))
        .collect()
}

/// Move the tool `active_id` to the position currently held by `over_id`.
///
/// Returns `None` when either id is unknown or both are the same, meaning
/// there is nothing to persist.
pub fn move_tool(tools: &[Tool], active_id: &str, over_id: &str) -> Option<Vec<Tool>> {
    if active_id == over_id {
        return None;
    }
    let from = tools.iter().position(|t| t.id == active_id)?;
    let to = tools.iter().position(|t| t.id == over_id)?;

    let mut out = tools.to_vec();
    let moved = out.remove(from);
    out.insert(to, moved);
    Some(out)
}

/// Bulk reorder payload: each tool's 1-based position in `tools`.
pub fn sort_updates(tools: &[Tool]) -> Vec<ToolSortUpdate> {
    tools
        .iter()
        .zip(1u32..)
        .map(|(tool, sort)| ToolSortUpdate {
            id: tool.id.clone(),
            sort,
        })
        .collect()
}
