//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the process.
//!
//! # Tasks
//! - Reaper: physically removes expired cache entries once per TTL period

mod reaper;

pub use reaper::spawn_reaper;
