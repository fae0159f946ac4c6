//! Gateway and operation tests.
//!
//! - `harness.rs`    - Mock transport, recording notifier/navigator, test harness
//! - `auth_guard.rs` - Credential checks and header assembly
//! - `retry.rs`      - Single retry on 401 and session expiry
//! - `responses.rs`  - Body parsing and failure classification
//! - `operations.rs` - Typed tool, category, token and account calls
//! - `session.rs`    - Login, logout and the session probe

mod auth_guard;
mod responses;
mod retry;
mod session;
