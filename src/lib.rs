//! SecureIoT Platform - Monitoring Core
//!
//! In-memory data and logic core behind the SecureIoT monitoring dashboard:
//! mock record generation, timer-driven simulated live feeds, the
//! query/filter engine used by the list views, audit log CSV export, the
//! user directory, system settings, and the application context.
//!
//! There is no backend and no persistence. Every collection lives in memory
//! for the lifetime of the process and is regenerated on restart.

pub mod constants;
pub mod context;
pub mod logic;
