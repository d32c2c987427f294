//! Value Changer
//!
//! Console utility that rewrites two pieces of Gorilla Tag's saved settings
//! in the registry: the three brightness channels and the player name.
//!
//! The library is split so everything above the platform layer runs on any
//! target: the presentation layer draws through the [`console::Surface`]
//! trait and the actions write through the [`registry::ValueStore`] trait.
//! The Windows console and registry backends live behind `cfg(windows)`.

pub mod actions;
pub mod app;
pub mod config;
pub mod console;
pub mod registry;
pub mod ui;
pub mod utils;

pub use utils::error::{ChangerError, Result};
