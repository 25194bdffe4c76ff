//! Validated command model used by the resolver and dispatcher.

use std::fmt;

/// The four supported action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Navigate,
    Export,
    Toggle,
    Custom,
}

impl ActionKind {
    /// Parse the wire spelling of an action kind.
    pub fn parse(raw: &str) -> Option<ActionKind> {
        match raw {
            "navigate" => Some(ActionKind::Navigate),
            "export" => Some(ActionKind::Export),
            "toggle" => Some(ActionKind::Toggle),
            "custom" => Some(ActionKind::Custom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Navigate => "navigate",
            ActionKind::Export => "export",
            ActionKind::Toggle => "toggle",
            ActionKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated action, with the payload its kind requires.
///
/// Building one of these goes through record validation, so a `Navigate`
/// always carries a target and a `Custom` always carries a function name.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Go to a route or view identified by `target`.
    Navigate { target: String },
    /// Trigger the host's data export.
    Export,
    /// Flip the UI element identified by `target`.
    Toggle { target: String },
    /// Invoke a named function from the dispatch registry.
    Custom { function_name: String },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Navigate { .. } => ActionKind::Navigate,
            Action::Export => ActionKind::Export,
            Action::Toggle { .. } => ActionKind::Toggle,
            Action::Custom { .. } => ActionKind::Custom,
        }
    }
}

/// Which dashboard modules a command is active in.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleScope {
    /// Active everywhere.
    All,
    /// Active only where an entry equals or contains the current module name.
    Modules(Vec<String>),
}

impl ModuleScope {
    /// Parse the wire form: the literal `"all"`, or a comma-separated list
    /// of module names. Blank entries are dropped, so an empty or
    /// all-commas string yields a scope that matches nothing.
    pub fn parse(raw: &str) -> ModuleScope {
        if raw.trim() == "all" {
            return ModuleScope::All;
        }
        let entries: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();
        ModuleScope::Modules(entries)
    }

    /// Whether the scope covers `module`.
    pub fn contains(&self, module: &str) -> bool {
        match self {
            ModuleScope::All => true,
            ModuleScope::Modules(entries) => entries
                .iter()
                .any(|entry| entry == module || entry.contains(module)),
        }
    }
}

/// A command ready for matching: validated action, parsed trigger list,
/// parsed module scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub id: i64,
    /// Human-readable label, used in logs and suggestions.
    pub name: String,
    /// Trigger phrases in declaration order, stored as declared (the
    /// matcher normalizes them per comparison).
    pub triggers: Vec<String>,
    pub action: Action,
    pub scope: ModuleScope,
    pub enabled: bool,
}

impl Command {
    /// Build an enabled command scoped to all modules.
    pub fn new(id: i64, name: impl Into<String>, triggers: Vec<String>, action: Action) -> Command {
        Command {
            id,
            name: name.into(),
            triggers,
            action,
            scope: ModuleScope::All,
            enabled: true,
        }
    }

    pub fn with_scope(mut self, scope: ModuleScope) -> Command {
        self.scope = scope;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Command {
        self.enabled = enabled;
        self
    }

    /// Whether the command participates in matching for `module`.
    pub fn is_active_in(&self, module: &str) -> bool {
        self.enabled && self.scope.contains(module)
    }
}
