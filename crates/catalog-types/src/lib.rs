//! Wire types for the catalog API.
//!
//! Field names follow the server's JSON (`catelog`, `createdAt`,
//! `hideGithub`), so every type here round-trips without renaming at the
//! call sites.

mod models;
mod tags;

pub use models::{
    fill_missing_ids, stable_id, AdminData, ApiToken, Category, LoginData, LoginRequest, LoginResponse,
    NewCategory, Settings, Tool, ToolListing, ToolSortUpdate, UserUpdate,
};
pub use tags::{ADMIN_TAG, ALL_TOOLS_TAG, SEARCH_TAG};
