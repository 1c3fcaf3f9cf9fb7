//! Core data types for the stock price chart widget.
//!
//! Everything in this crate is backend-independent: filtering a dataset by
//! the active (company, month) selection and deriving the chart view are
//! pure functions over in-memory records, so they can be tested without a
//! DOM or a WASM runtime. Rendering lives in `spc-chart-ui`.

pub mod company;
pub mod month;
pub mod record;
pub mod selection;
pub mod series;
pub mod view;
