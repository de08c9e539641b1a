//! Small pure helpers behind the page widgets
//!
//! Every listener-site decision with any content lives here, so the
//! behaviors test without a live document. One-line DOM effects stay at the
//! listener sites.

use crate::consts::SEARCH_MIN_CHARS;

/// Whether a search query is long enough to act on.
pub fn should_search(query: &str) -> bool {
    query.chars().count() >= SEARCH_MIN_CHARS
}

/// Copy-button markup for its two states.
pub fn copy_button_label(copied: bool) -> &'static str {
    if copied {
        r#"<i class="fas fa-check"></i> Copied!"#
    } else {
        r#"<i class="fas fa-copy"></i> Copy"#
    }
}

/// Load-more button markup for its two states.
pub fn load_more_label(loading: bool) -> &'static str {
    if loading {
        r#"<i class="fas fa-spinner fa-spin"></i> Loading..."#
    } else {
        "Load More"
    }
}

/// Re-entrancy guard for the load-more button: `begin` succeeds only while
/// idle, so a click during a load is dropped.
#[derive(Debug, Default)]
pub struct LoadGuard {
    loading: bool,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> bool {
        if self.loading {
            false
        } else {
            self.loading = true;
            true
        }
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_minimum_length() {
        assert!(!should_search(""));
        assert!(!should_search("ab"));
        assert!(should_search("abc"));
        assert!(should_search("logo design"));
    }

    #[test]
    fn test_search_counts_characters_not_bytes() {
        // Three characters, more than three bytes
        assert!(should_search("äöü"));
    }

    #[test]
    fn test_load_guard_drops_reentrant_clicks() {
        let mut guard = LoadGuard::new();
        assert!(guard.begin());
        assert!(!guard.begin());

        guard.finish();
        assert!(guard.begin());
    }

    #[test]
    fn test_labels_differ_by_state() {
        assert_ne!(copy_button_label(true), copy_button_label(false));
        assert_ne!(load_more_label(true), load_more_label(false));
    }
}
