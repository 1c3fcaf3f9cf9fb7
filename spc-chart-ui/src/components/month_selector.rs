//! Dropdown selector for choosing a month.

use crate::state::AppState;
use dioxus::prelude::*;
use spc_data::month::Month;
use spc_data::selection::SelectionEvent;

/// Month dropdown selector.
/// Lists all twelve months in calendar order and updates the selection on
/// change.
#[component]
pub fn MonthSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selection)().month;

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Month>() {
        Ok(month) => {
            let next = (state.selection)().apply(SelectionEvent::MonthPicked(month));
            state.selection.set(next);
        }
        Err(e) => log::debug!("ignoring month input: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "month-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Month: "
            }
            select {
                id: "month-select",
                onchange: on_change,
                for month in Month::ALL {
                    option {
                        value: "{month}",
                        selected: month == selected,
                        "{month}"
                    }
                }
            }
        }
    }
}
