//! Prelude module for convenient imports.
//!
//! ```ignore
//! use rafter::prelude::*;
//! ```

pub use crate::component::Component;
pub use crate::config::RuntimeConfig;
pub use crate::context::RenderContext;
pub use crate::error::RuntimeError;
pub use crate::node::Node;
pub use crate::node_ref::NodeRef;
pub use crate::runtime::{Mounted, Runtime};
pub use crate::slot::Ref;
pub use crate::state::{Scheduler, State};

pub use tuidom::{Color, Edges, Size, Style};
