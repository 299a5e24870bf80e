//! Shared data definitions for the `Tasklists` persisted format.

pub mod codec;
pub mod ids;
pub mod stored;
