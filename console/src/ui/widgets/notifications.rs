//! # Notifications Widget
//!
//! Notices become single prefixed lines: successes and infos go to stdout,
//! errors to stderr.

use crate::app::{Notice, NoticeLevel};

/// Line prefix for a notice level
pub fn prefix(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "✓",
        NoticeLevel::Info => "•",
        NoticeLevel::Error => "✗",
    }
}

pub fn format_notice(notice: &Notice) -> String {
    format!("{} {}", prefix(notice.level), notice.message)
}

/// Print notices to the terminal.
pub fn show(notices: &[Notice]) {
    for notice in notices {
        if notice.is_error() {
            eprintln!("{}", format_notice(notice));
        } else {
            println!("{}", format_notice(notice));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_notice() {
        assert_eq!(format_notice(&Notice::success("Category added")), "✓ Category added");
        assert_eq!(format_notice(&Notice::error("Payment failed")), "✗ Payment failed");
    }
}
