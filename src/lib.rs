//! themeshop is an in-terminal, theme-switchable storefront
//!
//! three pages (home, about and contact) are drawn with one of three compiled-in themes, each
//! bringing its own palette, font stacks and landing page layout. the home page shows products
//! fetched from a public REST catalog, and the chosen theme is remembered between runs.
#![forbid(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

pub mod macros;

#[cfg(feature = "cli")]
pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod models;
pub mod route;
pub mod store;
pub mod theme;
pub mod ui;
