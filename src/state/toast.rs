//! Toast notification state.
//!
//! DESIGN
//! ======
//! Every user-visible failure and confirmation flows through this queue.
//! The queue is bounded; pushing past the cap evicts the oldest entry so a
//! burst of failures cannot stack unbounded chrome.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

/// Most toasts shown at once.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Visual treatment of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    /// Neutral confirmation.
    #[default]
    Info,
    /// Failure styling.
    Destructive,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Stable identity for rendering and dismissal.
    pub id: Uuid,
    pub variant: ToastVariant,
    pub title: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast, evicting the oldest past the cap. Returns the new id.
    pub fn push(&mut self, variant: ToastVariant, title: String) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, variant, title });
        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove the toast with `id`, if it is still visible.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
