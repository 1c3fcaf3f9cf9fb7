use crate::company::Company;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily price record for one company.
///
/// `open` and `close` are `None` when the source row was missing the field.
/// The external loader that parses the CSV hands records over as-is; this
/// crate never repairs or drops them at ingest, only at filter time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub company: Company,
    pub open: Option<f64>,
    pub close: Option<f64>,
}

impl PriceRecord {
    pub fn new(date: NaiveDate, company: Company, open: Option<f64>, close: Option<f64>) -> Self {
        PriceRecord {
            date,
            company,
            open,
            close,
        }
    }

    /// True when both prices are present and finite. Records failing this
    /// never reach the chart.
    pub fn has_prices(&self) -> bool {
        matches!((self.open, self.close), (Some(o), Some(c)) if o.is_finite() && c.is_finite())
    }
}
