//! Radio group for choosing a company.

use crate::state::AppState;
use dioxus::prelude::*;
use spc_data::company::Company;
use spc_data::selection::SelectionEvent;

/// Company radio group.
/// Reads the active selection from AppState and routes picks through the
/// selection reducer.
#[component]
pub fn CompanySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selection)().company;

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Company>() {
        Ok(company) => {
            let next = (state.selection)().apply(SelectionEvent::CompanyPicked(company));
            state.selection.set(next);
        }
        Err(e) => log::debug!("ignoring company input: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 8px; align-items: center;",
            span {
                style: "font-weight: bold;",
                "Company: "
            }
            for company in Company::ALL {
                label {
                    style: "margin-right: 4px;",
                    input {
                        r#type: "radio",
                        name: "company",
                        value: "{company}",
                        checked: company == selected,
                        onchange: on_change,
                    }
                    " {company}"
                }
            }
        }
    }
}
