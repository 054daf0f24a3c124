//! Library side of the `rxmatch` command-line tool: configuration, file
//! loading, the fixture-backed interaction source, rendering, and logging.

pub mod config;
pub mod loader;
pub mod logging;
pub mod render;
pub mod source;
