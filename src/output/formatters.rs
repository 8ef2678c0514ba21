//! Formatting utilities for terminal output

use crate::core::Letter;
use crate::game::PlacementSlot;

/// Render tiles as boxed letters, e.g. `[A][P][P]`
#[must_use]
pub fn tiles_to_string<'a>(tiles: impl IntoIterator<Item = &'a Letter>) -> String {
    tiles
        .into_iter()
        .map(|letter| format!("[{}]", letter.as_char().to_ascii_uppercase()))
        .collect()
}

/// Render a slot with placeholders for its empty positions, e.g. `A P _ _ _`
#[must_use]
pub fn slot_to_string(slot: &PlacementSlot) -> String {
    let mut cells: Vec<String> = slot
        .letters()
        .iter()
        .map(|letter| letter.as_char().to_ascii_uppercase().to_string())
        .collect();
    cells.resize(slot.capacity(), "_".to_string());
    cells.join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
