//! Listing and admin-table filters.

use crate::fallback::{build_fallback_result_with, GOOGLE_SEARCH_URL};
use crate::matcher::matches;
use catalog_types::{Tool, ADMIN_TAG, ALL_TOOLS_TAG};

fn tool_matches(tool: &Tool, query: &str) -> bool {
    matches(&tool.name, query) || matches(&tool.desc, query) || matches(&tool.url, query)
}

/// Tools visible on the listing page for `tag` and `query`, followed by the
/// web-search card. Without data only the card is returned.
pub fn filter_listing(tools: Option<&[Tool]>, tag: &str, query: &str) -> Vec<Tool> {
    filter_listing_with(GOOGLE_SEARCH_URL, tools, tag, query)
}

pub fn filter_listing_with(
    engine_url: &str,
    tools: Option<&[Tool]>,
    tag: &str,
    query: &str,
) -> Vec<Tool> {
    let query = query.trim();
    let fallback = build_fallback_result_with(engine_url, query);
    let Some(tools) = tools else {
        return fallback;
    };

    let show_all = tag.is_empty() || tag == ALL_TOOLS_TAG;
    tools
        .iter()
        .filter(|tool| show_all || tool.catelog == tag)
        .filter(|tool| query.is_empty() || tool_matches(tool, query))
        .cloned()
        .chain(fallback)
        .collect()
}

/// Admin table view: optional text query over name/desc, optional category,
/// ordered by `sort` with ties kept in input order.
pub fn filter_admin_tools(tools: &[Tool], query: &str, catelog: Option<&str>) -> Vec<Tool> {
    let query = query.trim();
    let catelog = catelog.map(str::trim).filter(|c| !c.is_empty());

    let mut out: Vec<Tool> = tools
        .iter()
        .filter(|tool| {
            query.is_empty() || matches(&tool.name, query) || matches(&tool.desc, query)
        })
        .filter(|tool| catelog.map_or(true, |c| matches(&tool.catelog, c)))
        .cloned()
        .collect();
    out.sort_by_key(Tool::sort_key);
    out
}

/// Whether selecting `tag` should be persisted as the last tag.
pub fn should_remember_tag(tag: &str) -> bool {
    !tag.is_empty() && tag != ADMIN_TAG
}

/// Tag to open the listing on: the remembered one if it still exists.
pub fn initial_tag(last: Option<&str>, catelogs: &[String]) -> String {
    match last {
        Some(tag) if catelogs.iter().any(|c| c == tag) => tag.to_string(),
        _ => ALL_TOOLS_TAG.to_string(),
    }
}

/// Tag a search runs under.
///
/// An explicit tag always wins. Otherwise a non-blank query searches every
/// category, and a blank one reopens the remembered tag.
pub fn effective_tag(
    explicit: Option<&str>,
    remembered: Option<&str>,
    query: &str,
    catelogs: &[String],
) -> String {
    match explicit {
        Some(tag) => tag.to_string(),
        None if !query.trim().is_empty() => ALL_TOOLS_TAG.to_string(),
        None => initial_tag(remembered, catelogs),
    }
}

/// 1-based pick from a result list (Enter = 1, Ctrl+N = n).
pub fn nth_result(results: &[Tool], n: usize) -> Option<&Tool> {
    n.checked_sub(1).and_then(|i| results.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_types::SEARCH_TAG;

    fn tool(name: &str, catelog: &str, sort: Option<i64>) -> Tool {
        let mut t = Tool::new(name, format!("https://{}.example", name.to_lowercase()), catelog);
        t.sort = sort;
        t.id = catalog_types::stable_id(&t.url);
        t
    }

    fn sample() -> Vec<Tool> {
        vec![
            tool("Cargo", "Lang", Some(3)),
            tool("Grafana", "Ops", Some(1)),
            tool("搜索引擎", "Ops", None),
            tool("Clippy", "Lang", Some(1)),
        ]
    }

    fn names(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_no_data_yields_only_fallback() {
        let results = filter_listing(None, ALL_TOOLS_TAG, "rust");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].catelog, SEARCH_TAG);

        assert!(filter_listing(None, ALL_TOOLS_TAG, "").is_empty());
    }

    #[test]
    fn test_all_tag_without_query_returns_everything() {
        let tools = sample();
        let results = filter_listing(Some(&tools), ALL_TOOLS_TAG, "");
        assert_eq!(results, tools);
    }

    #[test]
    fn test_tag_filter() {
        let tools = sample();
        let results = filter_listing(Some(&tools), "Lang", "");
        assert_eq!(names(&results), vec!["Cargo", "Clippy"]);
    }

    #[test]
    fn test_query_filter_appends_card() {
        let tools = sample();
        let results = filter_listing(Some(&tools), ALL_TOOLS_TAG, "ssyq");
        assert_eq!(names(&results), vec!["搜索引擎", "Web search"]);

        let results = filter_listing(Some(&tools), "Lang", "graf");
        assert_eq!(names(&results), vec!["Web search"]);
    }

    #[test]
    fn test_query_searches_all_categories() {
        let catelogs = vec![ALL_TOOLS_TAG.to_string(), "Lang".to_string()];

        assert_eq!(effective_tag(None, Some("Lang"), "", &catelogs), "Lang");
        assert_eq!(effective_tag(None, Some("Lang"), "  ", &catelogs), "Lang");
        assert_eq!(effective_tag(None, Some("Lang"), "graf", &catelogs), ALL_TOOLS_TAG);
        assert_eq!(effective_tag(Some("Lang"), None, "graf", &catelogs), "Lang");
        assert_eq!(effective_tag(None, Some("Gone"), "", &catelogs), ALL_TOOLS_TAG);

        let tools = sample();
        let tag = effective_tag(None, Some("Lang"), "graf", &catelogs);
        let results = filter_listing(Some(&tools), &tag, "graf");
        assert_eq!(names(&results), vec!["Grafana", "Web search"]);
    }

    #[test]
    fn test_admin_filter_sorts_stably() {
        let tools = sample();
        let results = filter_admin_tools(&tools, "", None);
        assert_eq!(names(&results), vec!["搜索引擎", "Grafana", "Clippy", "Cargo"]);

        let results = filter_admin_tools(&tools, "c", Some("lang"));
        assert_eq!(names(&results), vec!["Clippy", "Cargo"]);
    }

    #[test]
    fn test_remember_tag() {
        assert!(should_remember_tag("Lang"));
        assert!(should_remember_tag(ALL_TOOLS_TAG));
        assert!(!should_remember_tag(ADMIN_TAG));
        assert!(!should_remember_tag(""));
    }

    #[test]
    fn test_initial_tag_requires_existing_category() {
        let catelogs = vec![ALL_TOOLS_TAG.to_string(), "Lang".to_string()];
        assert_eq!(initial_tag(Some("Lang"), &catelogs), "Lang");
        assert_eq!(initial_tag(Some("Gone"), &catelogs), ALL_TOOLS_TAG);
        assert_eq!(initial_tag(None, &catelogs), ALL_TOOLS_TAG);
    }

    #[test]
    fn test_nth_result_is_one_based() {
        let tools = sample();
        assert_eq!(nth_result(&tools, 1).map(|t| t.name.as_str()), Some("Cargo"));
        assert!(nth_result(&tools, 0).is_none());
        assert!(nth_result(&tools, 9).is_none());
    }
}
