//! チャンピオンカタログビューア（CLI）

pub mod cli;
pub mod config;
pub mod error;
pub mod http_source;
pub mod output;
