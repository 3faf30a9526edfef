//! Input module (front-end facing).
//!
//! Independent of the game engine. Maps `crossterm` key and mouse events into
//! [`crate::types::GameCommand`]s and pointer actions, and parses the text
//! command language of the prompt front end.

pub mod map;
pub mod text;

pub use tui_tictactoe_types as types;

pub use map::{
    handle_key_event, handle_mouse_event, should_quit, ClickTracker, PointerAction,
    DOUBLE_CLICK_MS,
};
pub use text::{parse_command, CommandError, TextCommand};
