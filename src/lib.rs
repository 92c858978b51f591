//! Vyapaar - a terminal inventory dashboard for small businesses
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod error;
pub mod input;
pub mod screens;
pub mod startup;
pub mod state;
pub mod ui;
