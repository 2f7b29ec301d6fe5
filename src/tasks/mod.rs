//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Stale-object sweeper: purges objects older than the freshness window
//!   from the in-memory backend at configured intervals

mod sweeper;

pub use sweeper::spawn_sweeper_task;
