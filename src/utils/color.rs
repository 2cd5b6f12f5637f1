//! Shared dashboard palette.

use eframe::egui::Color32;

/// Green for positive P&L values and the in-progress status.
pub const POSITIVE: Color32 = Color32::from_rgb(0, 180, 0);

/// Red for failed imports.
pub const NEGATIVE: Color32 = Color32::from_rgb(220, 50, 50);

/// Dimmed gray for secondary text.
pub const MUTED: Color32 = Color32::from_rgb(150, 150, 150);
