//! Interactive tabbed dashboard.
//!
//! [`DashboardBoard`] is the sink: one slot per section, overwritten as a
//! whole on every refresh. The ratatui front end shows one slot per tab.

mod app;
mod board;
mod event_handler;
mod render;

pub use app::{run_dashboard, DashboardApp};
pub use board::{DashboardBoard, Slot};
pub use event_handler::{map_key, DashboardEvent};
