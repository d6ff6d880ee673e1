//! TUI Module
//!
//! - event_loop: terminal setup, key handling, applying completions
//! - render: drawing the form

mod event_loop;
mod render;

pub use event_loop::run;
pub use render::draw_ui;
