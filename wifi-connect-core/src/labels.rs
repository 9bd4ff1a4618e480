//! Dropdown labels for scanned networks.

use crate::structs::{NetworkEntry, Security};

/// Signal bars, indexed by strength bucket.
pub const STRENGTH_GLYPHS: [&str; 4] = [
    "\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}", // ▁▁▁▁▁
    "\u{2581}\u{2583}\u{2583}\u{2583}",         // ▁▃▃▃
    "\u{2581}\u{2583}\u{2585}\u{2585}",         // ▁▃▅▅
    "\u{2581}\u{2583}\u{2585}\u{2587}",         // ▁▃▅▇
];

pub const LOCKED: &str = "\u{1F512}";
pub const UNLOCKED: &str = "\u{1F513}";

/// Maps a 0-100 strength percentage to one of the four glyph buckets.
pub fn strength_bucket(percent: i32) -> usize {
    let scaled = (f64::from(percent) / 100.0 * 4.0).floor();
    scaled.clamp(0.0, 3.0) as usize
}

pub fn lock_glyph(security: &Security) -> &'static str {
    if *security == Security::Open {
        UNLOCKED
    } else {
        LOCKED
    }
}

/// `"{lock} {bars} {ssid}"`, or just the ssid for hidden-class entries.
pub fn network_label(entry: &NetworkEntry) -> String {
    if entry.security == Security::Hidden {
        return entry.ssid.clone();
    }
    format!(
        "{} {} {}",
        lock_glyph(&entry.security),
        STRENGTH_GLYPHS[strength_bucket(entry.strength)],
        entry.ssid
    )
}
