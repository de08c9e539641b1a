//! GigMarket web enhancements
//!
//! Client-side behavior for the server-rendered marketplace pages, compiled
//! to WebAssembly:
//! - `draft`: debounced form draft autosave with LocalStorage persistence
//! - `storage`: key/value persistence abstraction with availability check
//! - `debounce`: last-write-wins callback discipline
//! - `api`: backend endpoint contracts and fetch helpers
//! - `format`: naira/date/relative-time formatting
//! - `rating`: star-rating widget state
//! - `widgets`: pure helpers behind the remaining page widgets

pub mod api;
pub mod debounce;
pub mod draft;
pub mod format;
pub mod rating;
pub mod storage;
pub mod widgets;

pub use draft::{Autosave, DraftPayload};
pub use storage::{KeyValueStore, MemoryStore, StoreError};

/// Timing and wiring constants
pub mod consts {
    /// Quiet period before an autosave fires (ms)
    pub const AUTOSAVE_DEBOUNCE_MS: i32 = 1_000;
    /// How long the "Draft saved" indicator stays visible (ms)
    pub const SAVE_INDICATOR_MS: i32 = 2_000;
    /// Quiet period before a search query is acted on (ms)
    pub const SEARCH_DEBOUNCE_MS: i32 = 500;
    /// Minimum query length before a search is attempted
    pub const SEARCH_MIN_CHARS: usize = 3;
    /// How long a copy button keeps its "copied" label (ms)
    pub const COPY_RESET_MS: i32 = 2_000;
    /// Server-rendered alerts auto-close after this long (ms)
    pub const ALERT_AUTO_HIDE_MS: i32 = 5_000;
    /// Injected notifications auto-remove after this long (ms)
    pub const NOTIFICATION_MS: i32 = 5_000;
    /// Simulated latency of the load-more stub (ms)
    pub const LOAD_MORE_DELAY_MS: i32 = 1_000;
}
