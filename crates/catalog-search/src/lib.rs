//! Pure helpers behind the listing and admin views.
//!
//! Nothing here performs I/O: given the same inputs every function returns
//! the same output.

mod fallback;
mod filter;
mod matcher;
mod order;

pub use fallback::{build_fallback_result, build_fallback_result_with, GOOGLE_SEARCH_URL};
pub use filter::{
    effective_tag, filter_admin_tools, filter_listing, filter_listing_with, initial_tag, nth_result,
    should_remember_tag,
};
pub use matcher::{matches, phonetic_match};
pub use order::{move_tool, order_categories, sort_updates, visible_categories};
