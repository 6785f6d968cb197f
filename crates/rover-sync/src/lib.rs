pub mod scheduler;

pub use scheduler::SyncScheduler;
