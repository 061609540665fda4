// This file derives the display-only integrity hash of a product draft.

use sha2::{Digest, Sha256};

use crate::domain::product::ProductDraft;

/// Hashes the four identifying draft fields into a lowercase hex SHA-256 digest.
///
/// Fields are concatenated in the order `id`, `name`, `producer_id`, `manufacture_date`
/// with no separator. Returns an empty string while `id` or `name` is still empty, so that
/// incomplete drafts show no fingerprint.
pub fn integrity_hash(id: &str, name: &str, producer_id: &str, manufacture_date: &str) -> String {
    if id.is_empty() || name.is_empty() {
        return String::new();
    }

    let mut hasher = Sha256::new();
    hasher.update(id.as_bytes());
    hasher.update(name.as_bytes());
    hasher.update(producer_id.as_bytes());
    hasher.update(manufacture_date.as_bytes());
    hex::encode(hasher.finalize())
}

/// Convenience wrapper over [`integrity_hash`] for a whole draft.
pub fn draft_hash(draft: &ProductDraft) -> String {
    integrity_hash(
        &draft.id,
        &draft.name,
        &draft.producer_id,
        &draft.manufacture_date,
    )
}

/// Keeps the currently displayed integrity hash of a draft in sync with its inputs.
///
/// Every edit of the source fields should go through [`IntegrityHashDeriver::refresh`]. The
/// deriver only reports an update when the recomputed value differs from the one on display.
#[derive(Debug, Clone, Default)]
pub struct IntegrityHashDeriver {
    current: String,
}

impl IntegrityHashDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value currently on display (empty for incomplete drafts).
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Recomputes the hash for `draft`.
    ///
    /// Returns `Some(new_value)` when the displayed value changed, `None` otherwise.
    pub fn refresh(&mut self, draft: &ProductDraft) -> Option<&str> {
        let next = draft_hash(draft);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(&self.current)
    }

    /// Forgets the displayed value, e.g. after a draft was submitted.
    pub fn clear(&mut self) {
        self.current.clear();
    }
}
