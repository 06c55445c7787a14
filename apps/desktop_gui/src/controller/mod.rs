//! Controller layer: UI events, reducer-like state transitions, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod pagination;
pub mod reducer;
pub mod watchlist;
