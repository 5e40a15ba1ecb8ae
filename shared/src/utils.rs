//! # Shared Utility Functions
//!
//! Display helpers used by every console screen.
//!
//! ## Amount Formatting
//!
//! Balances and prices always render with two fixed decimals:
//! - [`format_amount`] - `500` → `"500.00"`
//! - [`format_rupees`] - `500` → `"₹500.00"`
//!
//! ## Text Helpers
//!
//! - [`word_count`] - Whitespace-separated word count (blog description limit)
//! - [`truncate_text`] - Shorten long text for one-line list rows
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_rupees, truncate_text};
//!
//! assert_eq!(format_rupees(1299.5), "₹1299.50");
//! assert_eq!(truncate_text("A very long blog description", 11), "A very long...");
//! ```

/// Format an amount with exactly two decimal places.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(500.0), "500.00");
/// assert_eq!(format_amount(12.3456), "12.35");
/// ```
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format an amount in rupees with two decimal places.
pub fn format_rupees(amount: f64) -> String {
    format!("₹{}", format_amount(amount))
}

/// Count whitespace-separated words, ignoring leading/trailing whitespace.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Works on `char` boundaries so multi-byte text (Devanagari product names,
/// the rupee sign) never panics.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let prefix: String = text.chars().take(max_chars).collect();
    format!("{}...", prefix.trim_end())
}
