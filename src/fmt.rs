//! Shared formatting utilities for size display and console output

use console::Emoji;
use std::sync::atomic::{AtomicBool, Ordering};

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅ ", "[OK] ");

static PLAIN_SYMBOLS: AtomicBool = AtomicBool::new(false);

/// Force the plain-text fallback of every [`symbol`], as `--no-emoji` does
pub fn set_plain_symbols(plain: bool) {
    PLAIN_SYMBOLS.store(plain, Ordering::Relaxed);
}

/// Render `emoji`, or its fallback when emoji are disabled
///
/// Emoji are disabled by [`set_plain_symbols`], by a `NO_EMOJI` environment
/// variable, or when the terminal cannot display them.
pub fn symbol(emoji: Emoji<'_, '_>) -> String {
    if PLAIN_SYMBOLS.load(Ordering::Relaxed) || std::env::var_os("NO_EMOJI").is_some() {
        emoji.1.to_string()
    } else {
        emoji.to_string()
    }
}

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count as a human-readable size string
///
/// Zero is rendered as `no change` regardless of `signed`. Other values use
/// the largest binary unit that keeps the magnitude at or above 1, rounded to
/// two decimals without trailing zeros. With `signed`, the result is
/// prefixed with `+` or `-`.
///
/// # Examples
///
/// ```
/// use bundle_size::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512, false), "512 B");
/// assert_eq!(format_bytes(1024, false), "1 KB");
/// assert_eq!(format_bytes(1536, false), "1.5 KB");
/// assert_eq!(format_bytes(-2048, true), "-2 KB");
/// assert_eq!(format_bytes(0, true), "no change");
/// ```
pub fn format_bytes(bytes: i64, signed: bool) -> String {
    if bytes == 0 {
        return "no change".to_string();
    }

    let sign = match (signed, bytes < 0) {
        (false, _) => "",
        (true, true) => "-",
        (true, false) => "+",
    };

    let magnitude = bytes.unsigned_abs();
    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < UNITS.len() && magnitude / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    // Ties round away from zero, so 1.125 KB renders as 1.13 KB
    let scaled = ((magnitude as f64 / scale as f64) * 100.0).round() / 100.0;

    format!("{}{} {}", sign, scaled, UNITS[unit])
}
