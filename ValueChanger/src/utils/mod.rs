//! Shared helpers: error types, text handling and logging setup

pub mod error;
pub mod logging;
pub mod text;
