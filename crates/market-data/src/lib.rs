//! Niftyboard Market Data Crate
//!
//! Upstream feed access for the niftyboard dashboard.
//!
//! # Overview
//!
//! The NSE JSON endpoints reject anonymous API calls: a session cookie
//! issued on the public landing page must accompany every data request,
//! together with a matching Referer. This crate owns that handshake:
//!
//! ```text
//! +------------------+      +------------------+
//! |  Landing page    | ---> |  SessionToken    |  (Set-Cookie, step 1)
//! +------------------+      +------------------+
//!                                   |
//!                                   v  (paced delay)
//!                           +------------------+
//!                           |  Index endpoint  |  (Cookie + Referer, step 2)
//!                           +------------------+
//!                                   |
//!                                   v
//!                           +------------------+
//!                           |  Raw JSON body   |  (relayed verbatim)
//!                           +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`NseClient`] - Two-step handshake client for one index feed
//! - [`SessionToken`] - Cookie credential scoped to a single invocation
//! - [`StockRow`] - One security's snapshot, tolerant of missing numerics
//! - [`normalize`] - Pure payload-to-rows normalization step
//! - [`FeedError`] - Error taxonomy for both handshake steps

pub mod errors;
pub mod models;
pub mod provider;
pub mod session;

pub use errors::FeedError;
pub use models::{normalize, RowMeta, StockRow};
pub use provider::{NseClient, NseConfig};
pub use session::SessionToken;
