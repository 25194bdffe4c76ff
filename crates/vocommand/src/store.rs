//! In-memory command store.
//!
//! Commands are kept in insertion order, which the resolver treats as
//! match priority. Records are validated on the way in; a record that
//! fails validation is reported and skipped without disturbing the rest
//! of the store.

use crate::command::{split_phrases, Action, Command, CommandRecord, ModuleScope};
use crate::error::CommandError;

/// Ordered collection of validated commands.
#[derive(Debug, Clone)]
pub struct CommandStore {
    commands: Vec<Command>,
    next_id: i64,
}

impl Default for CommandStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandStore {
    pub fn new() -> CommandStore {
        CommandStore {
            commands: Vec::new(),
            next_id: 1,
        }
    }

    /// A store pre-populated with the stock dashboard commands.
    pub fn with_defaults() -> CommandStore {
        let mut store = CommandStore::new();
        store.install_defaults();
        store
    }

    /// Commands in priority order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, id: i64) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Enabled commands whose scope covers `module`, in priority order.
    pub fn active_for_module(&self, module: &str) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|c| c.is_active_in(module))
            .collect()
    }

    /// Validate and append a record. Records without an id get the next
    /// free one; records with an id keep it, and the id counter advances
    /// past it.
    pub fn insert(&mut self, record: CommandRecord) -> Result<i64, CommandError> {
        let command = record.validate(self.next_id)?;
        let id = command.id;
        self.next_id = self.next_id.max(id + 1);
        self.commands.push(command);
        Ok(id)
    }

    /// Validate and replace the command with `id` in place, keeping its
    /// position and id.
    pub fn update(&mut self, id: i64, record: CommandRecord) -> Result<(), CommandError> {
        let position = self
            .position(id)
            .ok_or(CommandError::UnknownId(id))?;
        let mut command = record.validate(id)?;
        command.id = id;
        self.commands[position] = command;
        Ok(())
    }

    /// Remove and return the command with `id`.
    pub fn remove(&mut self, id: i64) -> Result<Command, CommandError> {
        let position = self
            .position(id)
            .ok_or(CommandError::UnknownId(id))?;
        Ok(self.commands.remove(position))
    }

    /// Set the enabled flag: to `enabled` when given, otherwise flip the
    /// current state. Returns the new state.
    pub fn toggle(&mut self, id: i64, enabled: Option<bool>) -> Result<bool, CommandError> {
        let command = self
            .commands
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CommandError::UnknownId(id))?;
        command.enabled = enabled.unwrap_or(!command.enabled);
        tracing::info!(
            "command '{}' {}",
            command.name,
            if command.enabled { "enabled" } else { "disabled" }
        );
        Ok(command.enabled)
    }

    /// Validate and append a batch of records. Valid records are inserted;
    /// each rejected record is reported as `(name, error)` and skipped.
    pub fn load_records(&mut self, records: Vec<CommandRecord>) -> Vec<(String, CommandError)> {
        let mut rejected = Vec::new();
        for record in records {
            let name = record.name.clone();
            if let Err(err) = self.insert(record) {
                tracing::warn!("skipping command record '{name}': {err}");
                rejected.push((name, err));
            }
        }
        rejected
    }

    /// Load a JSON array of command records, as produced by the dashboard
    /// backend. Returns the per-record rejections; malformed JSON fails
    /// the whole load.
    pub fn load_json(&mut self, json: &str) -> Result<Vec<(String, CommandError)>, CommandError> {
        let records: Vec<CommandRecord> =
            serde_json::from_str(json).map_err(|err| CommandError::Parse(err.to_string()))?;
        Ok(self.load_records(records))
    }

    /// Append the stock commands the dashboard ships with. Existing
    /// commands are left untouched. Returns how many were added.
    pub fn install_defaults(&mut self) -> usize {
        let defaults = [
            (
                "Ir al Módulo 1",
                "módulo uno,ir al monitor,monitoreo",
                Action::Navigate { target: "/modulo1".to_string() },
                "all",
            ),
            (
                "Ir al Módulo 2",
                "módulo dos,ir al historial,estadísticas",
                Action::Navigate { target: "/modulo2".to_string() },
                "all",
            ),
            (
                "Ir al Módulo 4",
                "módulo cuatro,configurar voz,comandos de voz",
                Action::Navigate { target: "/modulo4".to_string() },
                "all",
            ),
            (
                "Exportar a Excel",
                "exportar,descargar excel,guardar datos",
                Action::Export,
                "modulo2",
            ),
            (
                "Ir al Inicio",
                "inicio,página principal,home",
                Action::Navigate { target: "/".to_string() },
                "all",
            ),
        ];

        let count = defaults.len();
        for (name, triggers, action, modules) in defaults {
            let id = self.next_id;
            self.next_id += 1;
            self.commands.push(Command {
                id,
                name: name.to_string(),
                triggers: split_phrases(triggers),
                action,
                scope: ModuleScope::parse(modules),
                enabled: true,
            });
        }
        tracing::info!("installed {count} default commands");
        count
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.commands.iter().position(|c| c.id == id)
    }
}
