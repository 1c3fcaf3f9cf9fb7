//! Container component the D3 renderer draws into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 renders into this)
    pub id: String,
    /// Minimum height in pixels, reserved before the first render
    #[props(default = 340)]
    pub min_height: u32,
}

/// A container div for the D3.js chart. Cleared and rebuilt wholesale on
/// every redraw; nothing else writes into it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "min-height: {props.min_height}px; width: 100%;",
        }
    }
}
