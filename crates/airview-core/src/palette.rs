//! Default chart palette.

use crate::scene::Color;

// ── Utilization tiers ─────────────────────────────────────────────────

pub const UTIL_LOW: Color = Color::new(0x50, 0xfa, 0x7b); // #50fa7b
pub const UTIL_MEDIUM: Color = Color::new(0xf1, 0xfa, 0x8c); // #f1fa8c
pub const UTIL_HIGH: Color = Color::new(0xff, 0x63, 0x63); // #ff6363

// ── Accents and chrome ────────────────────────────────────────────────

/// Recommended-channel accent (rank badges, emphasized panel entry).
pub const ACCENT: Color = Color::new(0xe1, 0x35, 0xff); // #e135ff
/// Non-overlapping channel marker and axis-label highlight.
pub const MARKER: Color = Color::new(0x80, 0xff, 0xea); // #80ffea
pub const GRID: Color = Color::new(0x62, 0x72, 0xa4); // #6272a4
pub const TEXT: Color = Color::new(0xbd, 0xc1, 0xcf); // #bdc1cf
pub const PANEL_BG: Color = Color::new(0x28, 0x2a, 0x36); // #282a36
/// Dark text drawn on top of accent-filled badges.
pub const BADGE_TEXT: Color = Color::new(0x1e, 0x1f, 0x29); // #1e1f29
