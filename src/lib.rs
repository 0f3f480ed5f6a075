//! Router-state: visibility and history for a tree of UI routers
//!
//! A UI is divided into named regions, each owned by a router. Routers form a
//! tree. On every navigation event an external state computer decides each
//! router's next state; this crate applies those states to the tree and keeps
//! a short, filtered history per router.
//!
//! # Core Concepts
//!
//! - **RouterState**: immutable visibility snapshot, replaced as a whole
//! - **RouterHistory**: prior states, most recent first, bounded and filtered
//! - **Manager**: owns the router registry, builds routers and applies locations
//! - **StateComputer**: the seam where location matching plugs in
//!
//! # Example
//!
//! ```rust
//! use router_state::core::RouterState;
//! use router_state::manager::{InitParams, Manager, RouterTree, StateMap};
//! use router_state::router::{Router, RouterConfig};
//!
//! // A location that simply names the new state of each router
//! let mut manager = Manager::builder()
//!     .computer(|location: &StateMap, _: &Router, _: &RouterTree| location.clone())
//!     .build()
//!     .unwrap();
//!
//! manager.add_router(InitParams::new("root"), vec![]).unwrap();
//! manager
//!     .add_router(
//!         InitParams::new("inbox")
//!             .parent("root")
//!             .config(RouterConfig::with_default_actions(["show"])),
//!         vec![],
//!     )
//!     .unwrap();
//! assert_eq!(manager.router("inbox").unwrap().state(), &RouterState::visible());
//!
//! let mut location = StateMap::new();
//! location.insert("inbox".to_string(), RouterState::hidden());
//! manager.apply_location(&location);
//!
//! let inbox = manager.router("inbox").unwrap();
//! assert_eq!(inbox.state(), &RouterState::hidden());
//! assert_eq!(inbox.history().entries(), &[RouterState::visible()]);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod manager;
pub mod router;

// Re-export commonly used types
pub use builder::{BuildError, ManagerBuilder};
pub use config::ManagerConfig;
pub use crate::core::{ChangeEvent, ChangeListener, RouterHistory, RouterState};
pub use manager::{InitArgs, InitParams, Manager, StateComputer, StateMap};
pub use router::{Router, RouterConfig, RouterError, RouterKind};
