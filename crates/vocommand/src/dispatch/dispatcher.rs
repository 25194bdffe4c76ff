//! Action dispatch contract.
//!
//! The engine stays decoupled from the host UI through
//! [`ActionDispatcher`]: navigation, export and toggle land on the trait,
//! custom functions go through the [`FunctionRegistry`]. Hosts implement
//! the trait once and test doubles record the calls.

use crate::command::Action;
use crate::dispatch::registry::FunctionRegistry;
use crate::error::DispatchError;

/// Host-side effects a matched command can request.
pub trait ActionDispatcher {
    /// Go to the route or view named by `target`.
    fn navigate(&mut self, target: &str) -> Result<(), DispatchError>;

    /// Run the host's data export for the current view.
    fn export(&mut self) -> Result<(), DispatchError>;

    /// Flip the UI element named by `target`.
    fn toggle(&mut self, target: &str) -> Result<(), DispatchError>;
}

/// Route a validated action to the dispatcher or the function registry.
pub fn dispatch(
    action: &Action,
    dispatcher: &mut dyn ActionDispatcher,
    registry: &FunctionRegistry,
) -> Result<(), DispatchError> {
    match action {
        Action::Navigate { target } => dispatcher.navigate(target),
        Action::Export => dispatcher.export(),
        Action::Toggle { target } => dispatcher.toggle(target),
        Action::Custom { function_name } => registry.invoke(function_name),
    }
}
