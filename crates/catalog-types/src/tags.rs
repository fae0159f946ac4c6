//! Display tags with fixed meaning on the listing page.

/// Pseudo-category that disables the category filter.
pub const ALL_TOOLS_TAG: &str = "全部工具";

/// Category label carried by synthetic web-search results.
pub const SEARCH_TAG: &str = "搜索";

/// Entry point to the admin panel; never remembered as the last tag.
pub const ADMIN_TAG: &str = "管理后台";
