//! Data model for the index feed.

mod stock;

pub use stock::{normalize, RowMeta, StockRow};
