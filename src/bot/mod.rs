//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles incoming text commands (/start, /play)
//! - `callback_handler`: Handles the hit/stand inline keyboard callbacks
//! - `ui_builder`: Creates keyboards and delivers render instructions

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in the binary.
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use ui_builder::{edit_render, game_keyboard, send_render};
