//! Wire representation of a stored command.
//!
//! Records arrive as JSON rows (one object per command, comma-separated
//! trigger and module lists) and are validated into [`Command`] values
//! before they can participate in matching. Validation failures surface as
//! [`CommandError`] diagnostics and exclude only the offending record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::command::types::{Action, ActionKind, Command, ModuleScope};
use crate::error::CommandError;

fn default_modules() -> String {
    "all".to_string()
}

fn default_enabled() -> bool {
    true
}

/// One raw command row, prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Row id. Absent on records that have not been stored yet; the store
    /// assigns one on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Comma-separated trigger phrases.
    pub trigger: String,
    /// Action kind spelling: `navigate`, `export`, `toggle` or `custom`.
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    /// Comma-separated module names, or `"all"`.
    #[serde(default = "default_modules")]
    pub modules: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CommandRecord {
    /// Build a minimal record for the given action spelling.
    pub fn new(
        name: impl Into<String>,
        trigger: impl Into<String>,
        action: impl Into<String>,
    ) -> CommandRecord {
        CommandRecord {
            id: None,
            name: name.into(),
            trigger: trigger.into(),
            action: action.into(),
            target: None,
            function_name: None,
            modules: default_modules(),
            enabled: default_enabled(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> CommandRecord {
        self.target = Some(target.into());
        self
    }

    pub fn with_function_name(mut self, function_name: impl Into<String>) -> CommandRecord {
        self.function_name = Some(function_name.into());
        self
    }

    pub fn with_modules(mut self, modules: impl Into<String>) -> CommandRecord {
        self.modules = modules.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> CommandRecord {
        self.enabled = enabled;
        self
    }

    /// Validate the record into a [`Command`], using `id` when the record
    /// does not carry its own.
    ///
    /// Checks, in order: the trigger list must contain at least one
    /// non-blank phrase, the action spelling must be known, navigate and
    /// toggle must carry a target, and custom must carry a function name.
    pub fn validate(&self, id: i64) -> Result<Command, CommandError> {
        let triggers = split_phrases(&self.trigger);
        if triggers.is_empty() {
            return Err(CommandError::NoTriggers);
        }

        let kind = ActionKind::parse(&self.action)
            .ok_or_else(|| CommandError::UnknownAction(self.action.clone()))?;

        let action = match kind {
            ActionKind::Navigate => Action::Navigate {
                target: self.required_target(kind)?,
            },
            ActionKind::Export => Action::Export,
            ActionKind::Toggle => Action::Toggle {
                target: self.required_target(kind)?,
            },
            ActionKind::Custom => {
                let function_name = self
                    .function_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or(CommandError::MissingFunctionName)?;
                Action::Custom {
                    function_name: function_name.to_string(),
                }
            }
        };

        Ok(Command {
            id: self.id.unwrap_or(id),
            name: self.name.clone(),
            triggers,
            action,
            scope: ModuleScope::parse(&self.modules),
            enabled: self.enabled,
        })
    }

    fn required_target(&self, kind: ActionKind) -> Result<String, CommandError> {
        self.target
            .as_deref()
            .map(str::trim)
            .filter(|target| !target.is_empty())
            .map(str::to_string)
            .ok_or(CommandError::MissingTarget(kind))
    }
}

/// Split a comma-separated phrase list, trimming entries and dropping
/// blanks.
pub fn split_phrases(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_and_trims_phrase_lists() {
        assert_eq!(
            split_phrases("inicio,página principal , home"),
            vec!["inicio", "página principal", "home"]
        );
        assert_eq!(split_phrases("exportar"), vec!["exportar"]);
        assert!(split_phrases("").is_empty());
        assert!(split_phrases(" , ,").is_empty());
    }

    #[test]
    fn validates_a_navigate_record() {
        let record = CommandRecord::new("Ir al Inicio", "inicio,página principal,home", "navigate")
            .with_target("/");

        let command = record.validate(7).unwrap();
        assert_eq!(command.id, 7);
        assert_eq!(command.name, "Ir al Inicio");
        assert_eq!(command.triggers, vec!["inicio", "página principal", "home"]);
        assert_eq!(command.action, Action::Navigate { target: "/".to_string() });
        assert_eq!(command.scope, ModuleScope::All);
        assert!(command.enabled);
    }

    #[test]
    fn record_id_wins_over_the_fallback() {
        let mut record = CommandRecord::new("Exportar", "exportar", "export");
        record.id = Some(42);
        assert_eq!(record.validate(7).unwrap().id, 42);
    }

    #[test]
    fn export_needs_no_target() {
        let record = CommandRecord::new("Exportar", "exportar", "export").with_modules("modulo2");
        let command = record.validate(1).unwrap();
        assert_eq!(command.action, Action::Export);
        assert_eq!(command.scope, ModuleScope::Modules(vec!["modulo2".to_string()]));
    }

    #[test]
    fn rejects_empty_trigger_lists() {
        let record = CommandRecord::new("Sin disparadores", " , ", "export");
        assert_eq!(record.validate(1), Err(CommandError::NoTriggers));
    }

    #[test]
    fn rejects_unknown_action_kinds() {
        let record = CommandRecord::new("Volar", "volar", "fly");
        assert_eq!(
            record.validate(1),
            Err(CommandError::UnknownAction("fly".to_string()))
        );
    }

    #[test]
    fn navigate_and_toggle_require_a_target() {
        let record = CommandRecord::new("Ir", "ir", "navigate");
        assert_eq!(
            record.validate(1),
            Err(CommandError::MissingTarget(ActionKind::Navigate))
        );

        let record = CommandRecord::new("Alternar", "alternar", "toggle").with_target("  ");
        assert_eq!(
            record.validate(1),
            Err(CommandError::MissingTarget(ActionKind::Toggle))
        );
    }

    #[test]
    fn custom_requires_a_function_name() {
        let record = CommandRecord::new("Refrescar", "refrescar", "custom");
        assert_eq!(record.validate(1), Err(CommandError::MissingFunctionName));

        let command = CommandRecord::new("Refrescar", "refrescar", "custom")
            .with_function_name("refresh_chart")
            .validate(1)
            .unwrap();
        assert_eq!(
            command.action,
            Action::Custom { function_name: "refresh_chart".to_string() }
        );
    }

    #[test]
    fn deserializes_a_stored_row() {
        let row = json!({
            "id": 5,
            "name": "Ir al Inicio",
            "trigger": "inicio,página principal,home",
            "action": "navigate",
            "target": "/",
            "function_name": null,
            "modules": "all",
            "enabled": true,
            "created_at": "2025-12-10T21:06:51Z",
            "updated_at": "2025-12-10T21:06:51Z"
        });

        let record: CommandRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.id, Some(5));
        assert_eq!(record.modules, "all");
        assert!(record.enabled);
        assert!(record.created_at.is_some());
        assert!(record.validate(5).is_ok());
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let row = json!({"name": "Exportar", "trigger": "exportar", "action": "export"});
        let record: CommandRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.modules, "all");
        assert!(record.enabled);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn serialization_omits_absent_options() {
        let record = CommandRecord::new("Exportar", "exportar", "export");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("function_name"));
        assert!(json.contains("\"modules\":\"all\""));
    }
}
