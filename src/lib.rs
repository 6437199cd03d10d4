// Library root. Exposes the catalog and server for integration tests.
// The binary entry point is src/main.rs.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logger;
pub mod server;
