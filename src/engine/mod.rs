//! Timer engine: state machine, scheduler abstraction and driver loop.

pub mod runner;
pub mod scheduler;
pub mod timer;

pub use runner::{Command, TimerRunner};
pub use scheduler::{ManualScheduler, Scheduler, TokioScheduler, Wakeup};
pub use timer::{TimerEngine, TimerEvent};
