use crate::record::PriceRecord;
use crate::selection::Selection;
use crate::series::filter_series;
use chrono::NaiveDate;
use serde::Serialize;

/// Stroke color for the open series.
pub const OPEN_COLOR: &str = "#b2df8a";
/// Stroke color for the close series.
pub const CLOSE_COLOR: &str = "#e41a1c";

/// One renderable point of the filtered series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Serialized as "YYYY-MM-DD" for `d3.timeParse`.
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    /// Close minus open; the tooltip's "Difference" line.
    pub delta: f64,
}

/// Backend-independent description of one chart render: the filtered
/// points plus the axis domains derived from them.
///
/// Both domains are `None` for an empty series; the renderer substitutes
/// a fallback domain so empty axes still draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub points: Vec<ChartPoint>,
    /// Min and max date across the filtered series.
    pub x_domain: Option<(NaiveDate, NaiveDate)>,
    /// Min and max over the union of open and close values.
    pub y_domain: Option<(f64, f64)>,
}

impl ChartView {
    /// Derive the visual spec for a dataset and selection. Pure; never
    /// touches the DOM.
    pub fn derive(records: &[PriceRecord], selection: Selection) -> ChartView {
        let points: Vec<ChartPoint> = filter_series(records, selection)
            .into_iter()
            .filter_map(|record| match (record.open, record.close) {
                (Some(open), Some(close)) => Some(ChartPoint {
                    date: record.date,
                    open,
                    close,
                    delta: close - open,
                }),
                _ => None,
            })
            .collect();

        let x_domain = match (
            points.iter().map(|p| p.date).min(),
            points.iter().map(|p| p.date).max(),
        ) {
            (Some(lo), Some(hi)) => Some((lo, hi)),
            _ => None,
        };

        let mut y_domain: Option<(f64, f64)> = None;
        for point in &points {
            for value in [point.open, point.close] {
                y_domain = Some(match y_domain {
                    Some((lo, hi)) => (lo.min(value), hi.max(value)),
                    None => (value, value),
                });
            }
        }

        ChartView {
            points,
            x_domain,
            y_domain,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The JSON array handed to the D3 renderer. `[]` for an empty view.
    pub fn data_json(&self) -> String {
        serde_json::to_string(&self.points).unwrap_or_default()
    }
}

/// Options consumed by the JS renderer. Keys are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    pub y_axis_label: String,
    pub open_color: String,
    pub close_color: String,
    pub open_label: String,
    pub close_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            title: String::new(),
            y_axis_label: "Price (USD)".to_string(),
            open_color: OPEN_COLOR.to_string(),
            close_color: CLOSE_COLOR.to_string(),
            open_label: "Open".to_string(),
            close_label: "Close".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
