//! Star-rating widget state
//!
//! Clicking a star selects a 1-based rating; hovering previews the fill.
//! Selection and hover are independent: leaving the widget clears the
//! preview but not the selection.

/// Selection and hover state for one rating widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingState {
    selected: u8,
    hover: Option<u8>,
}

impl RatingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click on the star at `index` (0-based). Returns the resulting
    /// 1-based rating, which the DOM layer writes into the hidden input.
    pub fn select(&mut self, index: u8) -> u8 {
        self.selected = index + 1;
        self.selected
    }

    /// Preview the fill up to the star at `index`.
    pub fn hover(&mut self, index: u8) {
        self.hover = Some(index + 1);
    }

    /// Pointer left the widget.
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Current 1-based rating, 0 when nothing is selected.
    pub fn rating(&self) -> u8 {
        self.selected
    }

    /// Whether the star at `index` renders filled.
    pub fn is_active(&self, index: u8) -> bool {
        index < self.selected
    }

    /// Whether the star at `index` renders hover-highlighted.
    pub fn is_hovered(&self, index: u8) -> bool {
        self.hover.is_some_and(|h| index < h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_fills_up_to_star() {
        let mut state = RatingState::new();
        assert_eq!(state.select(2), 3);

        assert!(state.is_active(0));
        assert!(state.is_active(2));
        assert!(!state.is_active(3));
    }

    #[test]
    fn test_reselect_lower_shrinks_fill() {
        let mut state = RatingState::new();
        state.select(4);
        state.select(0);
        assert_eq!(state.rating(), 1);
        assert!(state.is_active(0));
        assert!(!state.is_active(1));
    }

    #[test]
    fn test_hover_previews_without_selecting() {
        let mut state = RatingState::new();
        state.hover(3);

        assert!(state.is_hovered(3));
        assert!(!state.is_hovered(4));
        assert_eq!(state.rating(), 0);
        assert!(!state.is_active(0));
    }

    #[test]
    fn test_leave_clears_hover_keeps_selection() {
        let mut state = RatingState::new();
        state.select(1);
        state.hover(4);
        state.clear_hover();

        assert!(!state.is_hovered(0));
        assert!(state.is_active(1));
        assert_eq!(state.rating(), 2);
    }

    #[test]
    fn test_default_is_unrated() {
        let state = RatingState::new();
        assert_eq!(state.rating(), 0);
        assert!(!state.is_active(0));
        assert!(!state.is_hovered(0));
    }
}
