//! Listing search.

use super::Context;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use catalog_search::{effective_tag, filter_listing_with, nth_result, should_remember_tag};

/// Filter the public listing like the search box does.
///
/// Without `--tag` a query searches every category, and an empty query
/// reopens the remembered tag when it still exists. An explicit tag is
/// remembered for next time. `pick` prints only the URL of
/// the n-th result.
pub async fn search(
    ctx: &Context,
    query: &str,
    tag: Option<String>,
    pick: Option<usize>,
) -> Result<()> {
    let listing = ctx.api.fetch_list().await;
    let session = ctx.api.session();

    if let Some(tag) = tag.as_deref().filter(|t| should_remember_tag(t)) {
        session.set_last_tag(tag)?;
    }
    let remembered = session.get_last_tag()?;
    let tag = effective_tag(
        tag.as_deref(),
        remembered.as_deref(),
        query,
        &listing.catelogs,
    );
    tracing::debug!(tag = %tag, query = %query, "searching listing");

    let has_data = !listing.tools.is_empty();
    let results = filter_listing_with(
        &ctx.config.search_engine_url,
        has_data.then_some(listing.tools.as_slice()),
        &tag,
        query,
    );

    if let Some(n) = pick {
        match nth_result(&results, n) {
            Some(tool) => println!("{}", tool.url),
            None => anyhow::bail!("No result #{n} ({} results)", results.len()),
        }
        return Ok(());
    }

    if ctx.format == OutputFormat::Text {
        println!("Category: {tag}");
    }
    output::print_tools(&results, ctx.format);
    Ok(())
}
