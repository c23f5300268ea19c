//! Niftyboard Table Crate
//!
//! Client-side core of the dashboard: one fetch against the proxy, an
//! owned row list, and a windowed 50-row view over it.
//!
//! # Core Types
//!
//! - [`TableSession`] - Loading/Ready/Failed state machine for one visit
//! - [`FetchTicket`] - Generation stamp that discards stale responses
//! - [`ResultPage`] - Non-owning slice of the row list for rendering
//! - [`PageControl`] - Compact pagination control model
//! - [`DisplayConfig`] - Explicit display configuration, no ambient state
//!
//! Pagination, formatting and control derivation are pure functions of
//! state; only [`fetch::fetch_rows`] touches the network.

pub mod display;
pub mod fetch;
pub mod format;
pub mod pagination;
pub mod session;

pub use display::DisplayConfig;
pub use fetch::{fetch_rows, FetchError};
pub use pagination::{controls, total_pages, PageControl, ITEMS_PER_PAGE};
pub use session::{FetchTicket, ResultPage, TableSession, TableState};
