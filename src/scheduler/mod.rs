//! Scheduler layer - simulated buddy typing and reply deadlines
//!
//! The scheduler actor receives timer commands and reports deadlines back
//! to the App layer as timer events.

pub mod actor;

pub use actor::ReplyScheduler;
