//! Rafter - a small reactive component runtime on top of tuidom.
//!
//! A [`Component`] renders a [`Node`] tree from its [`State`]. Handlers write
//! state, which marks the component's [`Scheduler`] dirty; the host then
//! renders, commits the tree (binding [`NodeRef`]s), and runs the effects
//! registered through [`RenderContext::effect`], repeating until nothing is
//! dirty. [`Ref`] holds values that must persist without causing renders.

mod component;
mod config;
mod context;
mod effect;
mod error;
mod node;
mod node_ref;
pub mod prelude;
mod runtime;
mod slot;
mod state;

pub use component::Component;
pub use config::RuntimeConfig;
pub use context::RenderContext;
pub use effect::EffectStore;
pub use error::RuntimeError;
pub use node::Node;
pub use node_ref::NodeRef;
pub use runtime::{Mounted, Runtime};
pub use slot::Ref;
pub use state::{Scheduler, State};

pub use tuidom;
