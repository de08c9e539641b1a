//! Form draft autosave
//!
//! Persists in-progress form input locally so a user can resume after
//! navigating away or reloading, without server round-trips. One stored
//! entry per form id, fully replaced on every save, removed on submit.
//! An unsubmitted draft is kept indefinitely: that is the resume-later
//! contract, not a leak.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::debounce::{Debouncer, Ticket};
use crate::storage::{KeyValueStore, StoreError};

/// Stored draft: field name to field value, serialized as a flat JSON
/// object (`{"name":"Ada","email":"a@b.com"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPayload {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl DraftPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (name, value) pairs. Duplicate names keep the last value,
    /// matching FormData iteration order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            fields: entries.into_iter().collect(),
        }
    }

    /// Stored value for a field name, if any. Restore looks fields up by
    /// name, so stored keys with no matching field are simply never read.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Storage key for a form's draft.
pub fn draft_key(form_id: &str) -> String {
    format!("draft_{form_id}")
}

/// Autosave controller for one form.
///
/// Owns the form's storage key and its debounce handle; the DOM layer feeds
/// it field snapshots and applies restored values back to matching fields.
#[derive(Debug)]
pub struct Autosave<S> {
    form_id: String,
    key: String,
    store: S,
    debounce: Debouncer,
}

impl<S: KeyValueStore> Autosave<S> {
    pub fn new(form_id: impl Into<String>, store: S) -> Self {
        let form_id = form_id.into();
        let key = draft_key(&form_id);
        Self {
            form_id,
            key,
            store,
            debounce: Debouncer::new(),
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Storage key this controller saves under.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Arm the debounced save for the latest input event, superseding any
    /// pending one.
    pub fn arm(&mut self) -> Ticket {
        self.debounce.arm()
    }

    /// Whether this ticket is still the one allowed to save.
    pub fn try_fire(&mut self, ticket: Ticket) -> bool {
        self.debounce.try_fire(ticket)
    }

    /// Stored draft for this form, if present and well-formed. Malformed
    /// data is dropped with a warning, never an error: restore must not
    /// break page initialization.
    pub fn restore(&self) -> Option<DraftPayload> {
        let raw = self.store.read(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(payload) => Some(payload),
            Err(err) => {
                log::warn!("Discarding malformed draft for {}: {}", self.form_id, err);
                None
            }
        }
    }

    /// Replace the stored draft with the given field state.
    pub fn save(&mut self, payload: &DraftPayload) -> Result<(), StoreError> {
        if let Ok(json) = serde_json::to_string(payload) {
            self.store.write(&self.key, &json)?;
            log::debug!("Draft saved for {} ({} fields)", self.form_id, payload.len());
        }
        Ok(())
    }

    /// Remove the stored draft. Called on submit, unconditionally.
    pub fn clear(&mut self) {
        self.store.delete(&self.key);
        log::info!("Draft cleared for {}", self.form_id);
    }
}
