//! Terminal board renderer.
//!
//! Renders the game into a simple framebuffer of styled cells instead of
//! using a widget toolkit, then flushes only what changed to the terminal.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Make the drawing testable without a real terminal
//! - Allow precise control over aspect ratio (2 chars wide per pixel)

pub mod board_view;
pub mod fb;
pub mod raster;
pub mod redraw;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use board_view::{player_color, BoardView, ViewState, Viewport};
pub use fb::{palette, Cell, CellStyle, FrameBuffer, Rgb};
pub use redraw::RedrawGate;
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, TerminalRenderer};
