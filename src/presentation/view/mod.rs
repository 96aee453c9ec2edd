//! Client-side view state for editable record lists.
pub mod optimistic;
pub mod reconciler;

pub use optimistic::{Keyed, ListView, OptimisticList};
pub use reconciler::{EditOutcome, EditReconciler};
