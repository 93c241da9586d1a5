pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
pub mod selection;
pub mod shortcuts;
pub mod tui;
pub mod types;
