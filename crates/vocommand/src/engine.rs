//! Engine facade.
//!
//! Wires the command store, resolver and dispatch registry together
//! behind one entry point. Hosts feed recognized utterances to
//! [`Engine::handle`] with their current module and an
//! [`ActionDispatcher`]; everything else stays internal.

use crate::dispatch::{dispatch, ActionDispatcher, FunctionRegistry};
use crate::error::DispatchError;
use crate::matcher::MatchKind;
use crate::resolver::{CommandMatch, MatchConfig, Resolver, Suggestion, Utterance};
use crate::store::CommandStore;

/// What handling one utterance led to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A command matched and its action was dispatched.
    Dispatched {
        /// Name of the winning command.
        command: String,
        /// Trigger phrase as declared on the command.
        trigger: String,
        kind: MatchKind,
    },
    /// No trigger matched. `suggestion` names the nearest near-miss, when
    /// there was any in-scope candidate at all.
    NoMatch { suggestion: Option<Suggestion> },
}

/// Voice command engine: store, matcher and dispatch in one place.
pub struct Engine {
    store: CommandStore,
    registry: FunctionRegistry,
    resolver: Resolver,
}

impl Engine {
    /// An engine with an empty store and default matching.
    pub fn new() -> Engine {
        Engine::with_store(CommandStore::new())
    }

    pub fn with_store(store: CommandStore) -> Engine {
        Engine::with_config(store, MatchConfig::default())
    }

    pub fn with_config(store: CommandStore, config: MatchConfig) -> Engine {
        Engine {
            store,
            registry: FunctionRegistry::new(),
            resolver: Resolver::with_config(config),
        }
    }

    pub fn store(&self) -> &CommandStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CommandStore {
        &mut self.store
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.registry
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Match `text` against the stored commands without dispatching.
    pub fn resolve(&self, text: &str, module: &str) -> Option<CommandMatch<'_>> {
        self.resolver.resolve(self.store.commands(), text, module)
    }

    /// Handle one recognized utterance: resolve it for `module` and
    /// dispatch the winning command's action.
    ///
    /// A failed resolution is not an error; it yields
    /// [`Outcome::NoMatch`]. Errors come only from dispatch, and the
    /// engine's own state is never touched by them.
    pub fn handle(
        &self,
        utterance: &Utterance,
        module: &str,
        dispatcher: &mut dyn ActionDispatcher,
    ) -> Result<Outcome, DispatchError> {
        if let Some(confidence) = utterance.confidence {
            tracing::debug!("handling utterance '{}' (confidence {confidence:.2})", utterance.text);
        }

        match self.resolver.resolve(self.store.commands(), &utterance.text, module) {
            Some(hit) => {
                tracing::info!(
                    "dispatching command '{}' in module '{module}' ({:?} match on trigger '{}')",
                    hit.command.name,
                    hit.kind,
                    hit.trigger
                );
                dispatch(&hit.command.action, dispatcher, &self.registry)?;
                Ok(Outcome::Dispatched {
                    command: hit.command.name.clone(),
                    trigger: hit.trigger.to_string(),
                    kind: hit.kind,
                })
            }
            None => {
                let suggestion =
                    self.resolver
                        .suggest(self.store.commands(), &utterance.text, module);
                match &suggestion {
                    Some(near) => tracing::debug!(
                        "no match for '{}'; nearest trigger '{}' at {:.2}",
                        utterance.text,
                        near.trigger,
                        near.similarity
                    ),
                    None => tracing::debug!("no match for '{}'", utterance.text),
                }
                Ok(Outcome::NoMatch { suggestion })
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
