#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod document;
pub mod host;
pub mod layout;
pub mod markdown;
pub mod toc;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
