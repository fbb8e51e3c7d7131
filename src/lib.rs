//! `ghmcp`: wires the representative tool surface (spec §4.L) built in
//! `ghmcp-tools` to an HTTP transport (spec §4.M). The binary entry point is
//! a thin `main.rs`; everything routable lives here so integration tests can
//! build a [`state::AppState`]/[`http::build_router`] pair without spawning a
//! real process.

pub mod http;
pub mod mcp;
pub mod state;

pub use state::AppState;
