//! TrigCalc-rs library — application logic for the trigonometry calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
