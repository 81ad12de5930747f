//! Teammate check — the proxy endpoint's request/response contract,
//! prompt templating, and handler.

pub mod handlers;
pub mod models;
pub mod prompts;
