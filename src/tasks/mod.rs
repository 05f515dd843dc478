//! Background Tasks Module
//!
//! Contains background tasks owned by the strategy cache.
//!
//! # Tasks
//! - Expiry sweep: removes expired strategy entries at a fixed interval

mod sweep;

pub use sweep::spawn_sweep_task;
