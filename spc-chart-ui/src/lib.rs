//! Dioxus components and D3.js bridge for the stock price chart widget.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js renderer via `js_sys::eval()`
//! - `state`: reactive selection state shared through Dioxus context
//! - `components`: the `PriceChart` widget and its selector controls
//!
//! The host application supplies the parsed dataset as a prop; loading and
//! CSV parsing live outside this crate.

pub mod components;
pub mod js_bridge;
pub mod state;
