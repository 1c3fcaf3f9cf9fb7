//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderer lives in `assets/js/*.js`, embedded at compile time
//! and evaluated as globals (no ES modules) exposed via `window.*`. This
//! module provides safe Rust wrappers that hand serialized chart data to
//! those globals.

use wasm_bindgen::JsValue;

// Embed the chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PRICE_CHART_JS: &str = include_str!("../assets/js/price-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SPC JS call failed:', e); }}",
        code
    );
    let result: Result<JsValue, JsValue> = js_sys::eval(&wrapped);
    if let Err(e) = result {
        log::error!("js eval rejected: {:?}", e);
    }
}

/// Install the chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files declare `renderPriceChart`, `destroyPriceChart` and
/// the tooltip helpers via `function` declarations. To make them globally
/// accessible (not block-scoped inside the polling callback), the scripts
/// are stashed on `window`, evaluated at global scope via indirect `eval()`
/// once D3 is ready, and each function is then promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PRICE_CHART_JS].join("\n");

    let store_js = format!(
        "window.__spcChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__spcChartsReady || window.__spcChartsInstalling) return;
            window.__spcChartsInstalling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__spcChartScripts);
                    delete window.__spcChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderPriceChart !== 'undefined') window.renderPriceChart = renderPriceChart;
                    if (typeof destroyPriceChart !== 'undefined') window.destroyPriceChart = destroyPriceChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__spcChartsReady = true;
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Render the open/close price chart into the given container.
///
/// Polls until the chart scripts are installed and the container DOM
/// element exists before invoking the renderer, so callers can fire this
/// from an effect without ordering against `init_charts` or the first
/// DOM paint.
pub fn render_price_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__spcChartsReady &&
                    typeof window.renderPriceChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderPriceChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[SPC] renderPriceChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clear the chart and its tooltip from the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        r#"
        if (typeof window.destroyPriceChart !== 'undefined') {{
            window.destroyPriceChart('{container_id}');
        }} else {{
            var el = document.getElementById('{container_id}');
            if (el) el.innerHTML = '';
        }}
        "#,
    ));
}
