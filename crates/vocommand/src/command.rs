//! Command model: raw wire records and the validated form used for
//! matching.

pub mod record;
pub mod types;

pub use record::{split_phrases, CommandRecord};
pub use types::{Action, ActionKind, Command, ModuleScope};
