//! Logic Module - Generators, Feeds & Query Engine
//!
//! One submodule per record collection, plus the shared pieces:
//! - `query` - the filter/search/stats engine behind the list views
//! - `feed` - scheduled tick workers with explicit cancellation handles
//! - `window` - append-and-cap helpers for rolling windows
//! - `settings` - the fully enumerated settings payload
//! - `auth` - the hardcoded credential check

pub mod alert;
pub mod audit;
pub mod auth;
pub mod device;
pub mod feed;
pub mod firmware;
pub mod network;
pub mod query;
pub mod settings;
pub mod threat;
pub mod user;
pub mod window;
