use catalog_types::{stable_id, Tool, SEARCH_TAG};

/// Default engine prefix; the encoded query is appended verbatim.
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Characters `urlencoding` escapes that browsers leave as-is in a query
/// component.
const COMPONENT_SAFE: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode `query` the way `encodeURIComponent` does.
fn encode_component(query: &str) -> String {
    COMPONENT_SAFE
        .iter()
        .fold(urlencoding::encode(query).into_owned(), |encoded, (escaped, raw)| {
            encoded.replace(escaped, raw)
        })
}

/// The synthetic "search the web" card appended to every non-empty query.
pub fn build_fallback_result(query: &str) -> Vec<Tool> {
    build_fallback_result_with(GOOGLE_SEARCH_URL, query)
}

/// [`build_fallback_result`] against a configurable engine prefix.
///
/// Returns an empty list for blank queries, otherwise exactly one tool in
/// the [`SEARCH_TAG`] category whose id is derived from its link.
pub fn build_fallback_result_with(engine_url: &str, query: &str) -> Vec<Tool> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let url = format!("{engine_url}{}", encode_component(query));
    let mut tool = Tool::new("Web search", url, SEARCH_TAG);
    tool.desc = format!("Search the web for \"{query}\"");
    tool.hide = Some(false);
    tool.id = stable_id(&tool.url);
    vec![tool]
}
