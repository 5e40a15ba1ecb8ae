//! # Event Handlers
//!
//! Handlers organized by domain.

pub mod auth;
pub mod navigation;
