//! Router nodes, kinds and configuration.

mod config;
mod error;
mod kind;
#[allow(clippy::module_inception)]
mod router;

pub use config::{RouterConfig, SHOW_ACTION};
pub use error::RouterError;
pub use kind::RouterKind;
pub use router::Router;
