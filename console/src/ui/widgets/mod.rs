//! # Widgets
//!
//! Reusable text components shared by every screen.

pub mod notifications;
pub mod tables;

pub use tables::{render_empty_state, render_stats_summary, Table, TableConfig};
