//! Core module for `UniScout`

pub mod config;
pub mod fallback;
pub mod models;
pub mod outbound;
pub mod render;
pub mod screen;
pub mod store;
pub mod tracker;

/// Returns the current version of the `UniScout` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
