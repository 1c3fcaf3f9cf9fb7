//! Notice shown when the active selection matches no records.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyNoticeProps {
    pub message: String,
}

/// Muted note for an empty filter result. Not styled as an error: records
/// missing a price are dropped silently, and a (company, month) pair may
/// simply have no data.
#[component]
pub fn EmptyNotice(props: EmptyNoticeProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #F5F5F5; color: #666; border-radius: 4px; border: 1px solid #E0E0E0;",
            "{props.message}"
        }
    }
}
