//! `stayops-console` — the view-router boundary of the hotel console.
//!
//! This crate wires the session lifecycle, the role policy and the panel
//! datasets together. It renders nothing: it answers which sections are
//! visible, routes section requests, and hands panel data to whatever front
//! end sits on top.

pub mod app;
pub mod navigation;

pub use app::Console;
pub use navigation::{AppSection, route, visible_sections};
