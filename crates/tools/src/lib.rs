//! Library side of the `portfolio` CLI, kept separate so commands are testable
//! without a terminal or network.

pub mod commands;
pub mod http;

pub use http::HttpSource;
