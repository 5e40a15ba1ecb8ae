//! # Text Rendering
//!
//! The console's front end prints to a terminal. Screens render their state
//! into strings ([`screens`]) built from shared components ([`widgets`]).

pub mod screens;
pub mod widgets;

pub use widgets::notifications::show as show_notices;
