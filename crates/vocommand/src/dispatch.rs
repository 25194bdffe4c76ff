//! Dispatch of matched commands: the host-facing dispatcher trait and the
//! custom-function registry.

pub mod dispatcher;
pub mod registry;

pub use dispatcher::{dispatch, ActionDispatcher};
pub use registry::{CustomFn, FunctionRegistry};
