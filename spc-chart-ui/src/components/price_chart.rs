//! The stock price chart widget.
//!
//! `PriceChart` owns the (company, month) selection, derives the filtered
//! open/close series from the supplied records, and redraws the D3 chart
//! on mount and whenever the records or the selection change. The records
//! prop is a `ReadOnlySignal` so a parent handing over a new dataset
//! re-triggers the redraw effect.

use crate::components::{
    ChartContainer, ChartHeader, CompanySelector, EmptyNotice, MonthSelector,
};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use spc_data::record::PriceRecord;
use spc_data::view::{ChartConfig, ChartView};

/// DOM id for the chart container div.
const CHART_CONTAINER_ID: &str = "price-chart";

/// Interactive open/close price chart for a user-selected company and
/// month. The dataset arrives pre-parsed from the host application and is
/// treated as read-only.
#[component]
pub fn PriceChart(records: ReadOnlySignal<Vec<PriceRecord>>) -> Element {
    let mut state = use_context_provider(AppState::new);

    // One-shot: install the D3 chart scripts.
    use_effect(|| {
        js_bridge::init_charts();
    });

    // Redraw whenever the dataset or the selection changes. The container
    // is cleared and rebuilt wholesale on every pass; an empty series
    // still renders its axes and legend (the renderer substitutes a
    // fallback domain) with a notice alongside.
    use_effect(move || {
        let selection = (state.selection)();
        let view = ChartView::derive(&records.read(), selection);

        if view.is_empty() {
            state.notice.set(Some(format!(
                "No {} data for {}.",
                selection.company, selection.month
            )));
        } else {
            state.notice.set(None);
        }

        let config = ChartConfig {
            title: format!("{} Open vs Close ({})", selection.company, selection.month),
            ..ChartConfig::default()
        };
        js_bridge::render_price_chart(CHART_CONTAINER_ID, &view.data_json(), &config.to_json());
    });

    // Clear the chart and tooltip when the widget leaves the tree.
    use_drop(|| {
        js_bridge::destroy_chart(CHART_CONTAINER_ID);
    });

    rsx! {
        div {
            style: "max-width: 560px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "Daily Stock Prices".to_string(),
                unit_description: "US dollars at market open and close".to_string(),
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 8px;",
                CompanySelector {}
                MonthSelector {}
            }

            if let Some(msg) = (state.notice)() {
                EmptyNotice { message: msg }
            }

            ChartContainer {
                id: CHART_CONTAINER_ID.to_string(),
            }
        }
    }
}
