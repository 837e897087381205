//! Interactive Widget Logic
//!
//! Pure state and arithmetic behind the grid, text transformer, progress
//! meters and activity tracker. Kept free of DOM types so it is unit
//! testable off-wasm.

use rand::Rng;

/// Grid dimensions, fixed at 6x6.
pub const GRID_CELLS: usize = 36;

/// Interactions needed for the interaction meter to reach 100%.
const INTERACTION_TARGET: f64 = 20.0;

/// Combined score needed for the completion meter to reach 100%.
const COMPLETION_TARGET: f64 = 50.0;

pub const DEFAULT_THEME_COLOR: &str = "#ff9800";
pub const DEFAULT_FONT_SIZE: u32 = 16;

pub const TEXT_PLACEHOLDER: &str = "Interactive Demo Platform";
pub const CAPTION_PLACEHOLDER: &str = "Type in the input field to see real-time updates";
pub const DROP_PLACEHOLDER: &str = "Dropped content";

/// Fixed-size collection of toggleable cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridState {
    active: [bool; GRID_CELLS],
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    pub fn new() -> GridState {
        GridState {
            active: [false; GRID_CELLS],
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Flip a cell's state. Applying it twice restores the original state.
    pub fn toggle(&mut self, index: usize) {
        if let Some(cell) = self.active.get_mut(index) {
            *cell = !*cell;
        }
    }

    /// Force a cell inactive. A no-op on an already-inactive cell.
    pub fn deactivate(&mut self, index: usize) {
        if let Some(cell) = self.active.get_mut(index) {
            *cell = false;
        }
    }

    pub fn clear(&mut self) {
        self.active = [false; GRID_CELLS];
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// Stable display index, 1-based.
    pub fn cell_label(index: usize) -> String {
        (index + 1).to_string()
    }

    /// Pick a random inactive cell, or `None` when every cell is active.
    pub fn random_inactive(&self, rng: &mut impl Rng) -> Option<usize> {
        let inactive: Vec<usize> = (0..GRID_CELLS).filter(|&i| !self.active[i]).collect();
        if inactive.is_empty() {
            return None;
        }
        Some(inactive[rng.gen_range(0..inactive.len())])
    }
}

/// Uppercase the whole string when it is currently all-lowercase,
/// otherwise lowercase it.
pub fn toggle_case(text: &str) -> String {
    if text == text.to_lowercase() {
        text.to_uppercase()
    } else {
        text.to_lowercase()
    }
}

/// Reverse character order.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Display text, falling back to the placeholder when empty.
pub fn display_text(text: &str) -> String {
    if text.is_empty() {
        TEXT_PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}

/// Derived character-count caption under the dynamic text.
pub fn text_caption(text: &str) -> String {
    if text.is_empty() {
        CAPTION_PLACEHOLDER.to_string()
    } else {
        format!("You typed: \"{}\" ({} characters)", text, text.chars().count())
    }
}

/// Interaction meter: 20 interactions fill the bar.
pub fn interaction_progress(interaction_count: u32) -> f64 {
    (interaction_count as f64 / INTERACTION_TARGET * 100.0).min(100.0)
}

/// Completion meter over active cells, typed characters and interactions.
pub fn completion_progress(active_cells: usize, text_len: usize, interaction_count: u32) -> f64 {
    let score = active_cells as f64 + text_len as f64 + interaction_count as f64;
    (score / COMPLETION_TARGET * 100.0).min(100.0)
}

/// Simulated response-time meter, uniform in [70, 100).
pub fn response_progress(rng: &mut impl Rng) -> f64 {
    rng.gen_range(70.0..100.0)
}

/// Activity level decaying by 10 points per idle second.
pub fn activity_level(elapsed_ms: i64) -> f64 {
    (100.0 - elapsed_ms as f64 / 1000.0 * 10.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn toggle_twice_restores_cell() {
        let mut grid = GridState::new();
        let original = grid;
        grid.toggle(17);
        assert!(grid.is_active(17));
        assert_eq!(grid.active_count(), 1);
        grid.toggle(17);
        assert_eq!(grid, original);
    }

    #[test]
    fn deactivate_is_unconditional() {
        let mut grid = GridState::new();
        grid.toggle(4);
        grid.deactivate(4);
        assert!(!grid.is_active(4));

        // already inactive: state unchanged
        let before = grid;
        grid.deactivate(4);
        assert_eq!(grid, before);
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut grid = GridState::new();
        for i in [0, 5, 35] {
            grid.toggle(i);
        }
        grid.clear();
        assert_eq!(grid.active_count(), 0);
    }

    #[test]
    fn cell_labels_are_one_based() {
        assert_eq!(GridState::cell_label(0), "1");
        assert_eq!(GridState::cell_label(35), "36");
    }

    #[test]
    fn random_inactive_skips_active_cells() {
        let mut grid = GridState::new();
        for i in 0..GRID_CELLS - 1 {
            grid.toggle(i);
        }
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(grid.random_inactive(&mut rng), Some(GRID_CELLS - 1));

        grid.toggle(GRID_CELLS - 1);
        assert_eq!(grid.random_inactive(&mut rng), None);
    }

    #[test]
    fn case_toggles_based_on_current_case() {
        assert_eq!(toggle_case("hello"), "HELLO");
        assert_eq!(toggle_case("HELLO"), "hello");
        assert_eq!(toggle_case("Hello"), "hello");
        assert_eq!(toggle_case(""), "");
    }

    #[test]
    fn reverse_handles_multibyte() {
        assert_eq!(reverse_text("abc"), "cba");
        assert_eq!(reverse_text("héllo"), "olléh");
    }

    #[test]
    fn display_text_falls_back_to_placeholder() {
        assert_eq!(display_text(""), TEXT_PLACEHOLDER);
        assert_eq!(display_text("hi"), "hi");
    }

    #[test]
    fn caption_counts_characters() {
        assert_eq!(text_caption(""), CAPTION_PLACEHOLDER);
        assert_eq!(text_caption("héllo"), "You typed: \"héllo\" (5 characters)");
    }

    #[test]
    fn interaction_progress_clamps_at_100() {
        assert_eq!(interaction_progress(0), 0.0);
        assert_eq!(interaction_progress(10), 50.0);
        assert_eq!(interaction_progress(20), 100.0);
        assert_eq!(interaction_progress(200), 100.0);
    }

    #[test]
    fn completion_progress_clamps_at_100() {
        assert_eq!(completion_progress(0, 0, 0), 0.0);
        assert_eq!(completion_progress(5, 10, 10), 50.0);
        assert_eq!(completion_progress(36, 100, 100), 100.0);
    }

    #[test]
    fn response_progress_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let p = response_progress(&mut rng);
            assert!((70.0..100.0).contains(&p));
        }
    }

    #[test]
    fn activity_decays_to_zero() {
        assert_eq!(activity_level(0), 100.0);
        assert_eq!(activity_level(5_000), 50.0);
        assert_eq!(activity_level(10_000), 0.0);
        assert_eq!(activity_level(60_000), 0.0);
    }
}
