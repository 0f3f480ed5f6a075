//! Builder API for constructing router managers.
//!
//! The builder gathers configuration, the state computer and any change
//! listeners, then validates them once in `build()`.

pub mod error;
pub mod manager;

pub use error::BuildError;
pub use manager::ManagerBuilder;
