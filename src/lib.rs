//! studentreg - student registration service
//!
//! One validator shared by every entry point, a pluggable student store
//! (embedded sqlite by default, networked MySQL opt-in with graceful
//! fallback), and an HTTP API over both.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod validator;
