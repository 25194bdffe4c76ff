//! Voice command matching engine for spoken-command dashboards.
//!
//! This crate turns recognized speech into dashboard actions:
//! - Text normalization shared by utterances and trigger phrases
//! - Exact, substring and Levenshtein-based fuzzy trigger matching
//! - First-match resolution over an ordered, module-scoped command list
//! - A dispatch contract (host dispatcher trait plus a registry of named
//!   custom functions)

pub mod command;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod resolver;
pub mod similarity;
pub mod store;

// Re-export main types
pub use command::{Action, ActionKind, Command, CommandRecord, ModuleScope};
pub use dispatch::{dispatch, ActionDispatcher, CustomFn, FunctionRegistry};
pub use engine::{Engine, Outcome};
pub use error::{CommandError, DispatchError};
pub use matcher::{match_trigger, MatchKind};
pub use normalize::normalize;
pub use resolver::{
    CommandMatch, MatchConfig, Resolver, Suggestion, Utterance, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use similarity::{levenshtein, similarity};
pub use store::CommandStore;
