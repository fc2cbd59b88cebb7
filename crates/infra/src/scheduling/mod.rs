//! Scheduling infrastructure
//!
//! Schedulers follow the same runtime rules:
//! - Explicit lifecycle management (start/stop)
//! - Join handles for spawned tasks
//! - Cancellation token support, also triggered on drop

pub mod countdown_scheduler;
pub mod error;

pub use countdown_scheduler::{CountdownScheduler, CountdownSchedulerConfig};
pub use error::{SchedulerError, SchedulerResult};
