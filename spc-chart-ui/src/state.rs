//! Widget state managed via Dioxus context.
//!
//! `AppState` is provided by `PriceChart` via `use_context_provider`; the
//! selector components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use spc_data::selection::Selection;

/// Shared state for the chart widget and its selector controls.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The active (company, month) selection. Updated only through the
    /// selection reducer.
    pub selection: Signal<Selection>,
    /// Message shown when the active selection matches no records.
    pub notice: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with the default selection.
    pub fn new() -> Self {
        Self {
            selection: Signal::new(Selection::default()),
            notice: Signal::new(None),
        }
    }
}
