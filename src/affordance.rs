//! Document affordances held during a divider drag.
//!
//! While the divider is dragged the whole window shows the resize cursor and
//! pane content must not receive pointer input (no text selection, no native
//! webview swallowing the moves). That is window-wide state, so it is modelled
//! as a lock with at most one holder per UI thread. Only the drag controller
//! acquires and releases it.

use crate::error::{EditorError, EditorResult};
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static HOLDER: Cell<Option<AffordanceOwner>> = const { Cell::new(None) };
}

/// Identity of a component allowed to hold the affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AffordanceOwner(u64);

impl AffordanceOwner {
    /// Allocate a fresh owner id.
    pub fn next() -> Self {
        Self(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Window-wide resize cursor and selection lock.
pub struct DocumentAffordances;

impl DocumentAffordances {
    /// Take the affordances for `owner`. Re-acquiring by the current holder is
    /// a no-op; any other holder makes this fail.
    pub fn acquire(owner: AffordanceOwner) -> EditorResult<()> {
        HOLDER.with(|holder| match holder.get() {
            None => {
                holder.set(Some(owner));
                debug!(owner = owner.0, "Document affordances acquired");
                Ok(())
            }
            Some(current) if current == owner => Ok(()),
            Some(current) => {
                warn!(owner = owner.0, holder = current.0, "Document affordances already held");
                Err(EditorError::AffordancesHeld { holder: current.0 })
            }
        })
    }

    /// Release the affordances if `owner` holds them. Returns whether anything
    /// was released.
    pub fn release(owner: AffordanceOwner) -> bool {
        HOLDER.with(|holder| {
            if holder.get() == Some(owner) {
                holder.set(None);
                debug!(owner = owner.0, "Document affordances released");
                true
            } else {
                false
            }
        })
    }

    pub fn holder() -> Option<AffordanceOwner> {
        HOLDER.with(|holder| holder.get())
    }

    /// Whether the resize cursor and selection lock are in effect.
    pub fn is_active() -> bool {
        Self::holder().is_some()
    }
}
