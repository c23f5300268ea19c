//! Upstream feed clients.

pub mod nse;

pub use nse::{NseClient, NseConfig};
