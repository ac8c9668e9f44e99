//! Expose tagdocs' internal API for use in integration tests. While it
//! *could* be useful elsewhere, this API is primarily intended for testing
//! purposes.
pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod utils;
