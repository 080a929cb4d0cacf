//! Shared formatting utilities for console output

use console::Emoji;

/// Package emoji for resource sets
pub const PACKAGE: Emoji = Emoji("📦", "*");

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format a count with a singular or plural noun
///
/// # Examples
///
/// ```
/// use scriptset::fmt::format_count;
///
/// assert_eq!(format_count(0, "file"), "0 files");
/// assert_eq!(format_count(1, "file"), "1 file");
/// assert_eq!(format_count(4, "set"), "4 sets");
/// ```
pub fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Render a flag as "on"/"off"
pub fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
