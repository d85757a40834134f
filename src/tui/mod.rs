//! Terminal front-end: ratatui rendering over a crossterm event loop.

pub mod app;
pub mod controller;
mod ui;
