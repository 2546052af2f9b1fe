//! the interactive application
pub mod cli;
pub mod core;
pub mod logging;
pub mod menus;

pub use core::ShopApp;
