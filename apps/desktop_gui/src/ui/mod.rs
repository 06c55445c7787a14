//! UI layer for desktop GUI: app shell, dashboard, and the widgets it is built from.

pub mod app;
pub mod dashboard;
pub mod grid;
pub mod loader;
pub mod pagination;

pub use app::ChampdexApp;
