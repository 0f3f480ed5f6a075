//! Router registration errors.

use thiserror::Error;

/// Errors that can occur when registering or looking up routers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("Unknown router kind '{0}'. Expected one of: scene, stack, feature, data")]
    UnknownRouterKind(String),

    #[error("A router named '{name}' is already registered")]
    DuplicateRouter { name: String },

    #[error("Root router '{existing}' already defined, cannot add parentless router '{attempted}'")]
    RootAlreadyDefined { existing: String, attempted: String },

    #[error("No router named '{name}' is registered")]
    RouterNotFound { name: String },
}
