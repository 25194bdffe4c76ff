//! Command resolution.
//!
//! The resolver walks an ordered command list and returns the first
//! trigger that matches the utterance. Priority is positional: earlier
//! commands win over later ones, and within a command earlier trigger
//! phrases win over later ones. There is no scoring pass across the whole
//! list, so resolution cost stays linear in the number of trigger phrases.

use crate::command::Command;
use crate::matcher::{match_trigger, MatchKind};
use crate::normalize::normalize;
use crate::similarity::similarity;

/// Similarity a trigger must strictly exceed to fuzzy-match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Matching tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Fuzzy-match cutoff. Raising it trades recall for precision;
    /// matching is strict, so the score must exceed this value.
    pub similarity_threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// A spoken phrase as delivered by the host's recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Recognizer confidence in `[0.0, 1.0]`, when the host supplies one.
    /// Logged for diagnosis; it never gates matching.
    pub confidence: Option<f64>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Utterance {
        Utterance {
            text: text.into(),
            confidence: None,
        }
    }

    pub fn with_confidence(text: impl Into<String>, confidence: f64) -> Utterance {
        Utterance {
            text: text.into(),
            confidence: Some(confidence.clamp(0.0, 1.0)),
        }
    }
}

/// A successful resolution: the winning command, the trigger phrase as
/// declared on it, and the stage that matched.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandMatch<'a> {
    pub command: &'a Command,
    pub trigger: &'a str,
    pub kind: MatchKind,
}

/// A near-miss candidate for "did you mean" style hints, produced only
/// when resolution fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub command_name: String,
    pub trigger: String,
    pub similarity: f64,
}

/// Scans ordered command lists for the first matching trigger.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: MatchConfig,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Resolver {
        Resolver::with_config(MatchConfig::default())
    }

    pub fn with_config(config: MatchConfig) -> Resolver {
        Resolver { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Resolve `utterance` against `commands` for the current `module`.
    ///
    /// Disabled commands and commands whose scope does not cover `module`
    /// are skipped. Returns `None` for an utterance that normalizes to
    /// empty text or when no trigger matches.
    pub fn resolve<'a>(
        &self,
        commands: &'a [Command],
        utterance: &str,
        module: &str,
    ) -> Option<CommandMatch<'a>> {
        let needle = normalize(utterance);
        if needle.is_empty() {
            return None;
        }

        for command in commands.iter().filter(|c| c.is_active_in(module)) {
            for trigger in &command.triggers {
                let threshold = self.config.similarity_threshold;
                if let Some(kind) = match_trigger(&needle, &normalize(trigger), threshold) {
                    tracing::debug!(
                        "utterance '{needle}' matched '{}' via trigger '{trigger}' ({kind:?})",
                        command.name
                    );
                    return Some(CommandMatch {
                        command,
                        trigger,
                        kind,
                    });
                }
            }
        }

        None
    }

    /// Best near-miss for a failed resolution: the in-scope trigger with
    /// the highest similarity to the utterance. Ties keep the earlier
    /// candidate. Callers decide whether the returned score is close
    /// enough to show to a user.
    pub fn suggest(
        &self,
        commands: &[Command],
        utterance: &str,
        module: &str,
    ) -> Option<Suggestion> {
        let needle = normalize(utterance);
        if needle.is_empty() {
            return None;
        }

        let mut best: Option<Suggestion> = None;
        for command in commands.iter().filter(|c| c.is_active_in(module)) {
            for trigger in &command.triggers {
                let score = similarity(&needle, &normalize(trigger));
                if best.as_ref().map_or(true, |b| score > b.similarity) {
                    best = Some(Suggestion {
                        command_name: command.name.clone(),
                        trigger: trigger.clone(),
                        similarity: score,
                    });
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Action, ModuleScope};

    fn make_navigate(id: i64, name: &str, triggers: &[&str], target: &str) -> Command {
        Command::new(
            id,
            name,
            triggers.iter().map(|t| t.to_string()).collect(),
            Action::Navigate {
                target: target.to_string(),
            },
        )
    }

    fn make_commands() -> Vec<Command> {
        vec![
            make_navigate(1, "Ir al Módulo 1", &["módulo uno", "ir al monitor"], "/modulo1"),
            make_navigate(2, "Ir al Módulo 2", &["módulo dos", "ir al historial"], "/modulo2"),
            Command::new(3, "Exportar a Excel", vec!["exportar".to_string()], Action::Export)
                .with_scope(ModuleScope::parse("modulo2")),
            make_navigate(4, "Ir al Inicio", &["inicio", "página principal", "home"], "/"),
        ]
    }

    #[test]
    fn resolves_an_exact_trigger() {
        let commands = make_commands();
        let hit = Resolver::new()
            .resolve(&commands, "módulo uno", "modulo1")
            .unwrap();
        assert_eq!(hit.command.id, 1);
        assert_eq!(hit.trigger, "módulo uno");
        assert_eq!(hit.kind, MatchKind::Exact);
    }

    #[test]
    fn resolves_a_trigger_embedded_in_a_longer_phrase() {
        let commands = make_commands();
        let hit = Resolver::new()
            .resolve(&commands, "llévame al inicio por favor", "modulo1")
            .unwrap();
        assert_eq!(hit.command.name, "Ir al Inicio");
        assert_eq!(hit.trigger, "inicio");
        assert_eq!(hit.kind, MatchKind::Substring);
    }

    #[test]
    fn resolves_a_misspelled_trigger_fuzzily() {
        let commands = make_commands();
        let hit = Resolver::new()
            .resolve(&commands, "exportr", "modulo2")
            .unwrap();
        assert_eq!(hit.command.name, "Exportar a Excel");
        assert_eq!(hit.kind, MatchKind::Fuzzy);
    }

    #[test]
    fn earlier_command_wins_when_several_match() {
        let mut commands = make_commands();
        commands.insert(
            0,
            make_navigate(9, "Atajo al Inicio", &["inicio"], "/atajo"),
        );
        let hit = Resolver::new()
            .resolve(&commands, "inicio", "modulo1")
            .unwrap();
        assert_eq!(hit.command.id, 9);
    }

    #[test]
    fn earlier_trigger_wins_within_a_command() {
        let commands = vec![make_navigate(1, "Ir al Inicio", &["inicio", "home"], "/")];
        let hit = Resolver::new()
            .resolve(&commands, "home inicio", "modulo1")
            .unwrap();
        assert_eq!(hit.trigger, "inicio");
    }

    #[test]
    fn skips_disabled_commands() {
        let mut commands = make_commands();
        commands[3].enabled = false;
        let resolver = Resolver::new();
        assert!(resolver.resolve(&commands, "inicio", "modulo1").is_none());
    }

    #[test]
    fn skips_commands_out_of_module_scope() {
        let commands = make_commands();
        let resolver = Resolver::new();
        assert!(resolver.resolve(&commands, "exportar", "modulo1").is_none());
        assert!(resolver.resolve(&commands, "exportar", "modulo2").is_some());
    }

    #[test]
    fn empty_or_punctuation_only_utterances_resolve_to_none() {
        let commands = make_commands();
        let resolver = Resolver::new();
        assert!(resolver.resolve(&commands, "", "modulo1").is_none());
        assert!(resolver.resolve(&commands, "  ¡¡!! ", "modulo1").is_none());
    }

    #[test]
    fn an_empty_command_list_resolves_to_none() {
        assert!(Resolver::new().resolve(&[], "inicio", "modulo1").is_none());
    }

    #[test]
    fn threshold_override_changes_fuzzy_outcomes() {
        let commands = make_commands();
        let lax = Resolver::with_config(MatchConfig {
            similarity_threshold: 0.6,
        });
        // "modulo nuo" scores exactly 0.8 against "modulo uno": rejected
        // by the strict default, accepted once the threshold drops.
        assert!(Resolver::new().resolve(&commands, "módulo nuo", "modulo1").is_none());
        let hit = lax.resolve(&commands, "módulo nuo", "modulo1").unwrap();
        assert_eq!(hit.command.id, 1);
        assert_eq!(hit.kind, MatchKind::Fuzzy);
    }

    #[test]
    fn suggests_the_nearest_trigger_after_a_miss() {
        let commands = make_commands();
        let resolver = Resolver::new();
        assert!(resolver.resolve(&commands, "módulo", "modulo1").is_none());

        let suggestion = resolver.suggest(&commands, "módulo", "modulo1").unwrap();
        assert_eq!(suggestion.trigger, "módulo uno");
        assert_eq!(suggestion.command_name, "Ir al Módulo 1");
        assert!((suggestion.similarity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn suggestions_respect_scope_and_empty_input() {
        let commands = make_commands();
        let resolver = Resolver::new();
        let suggestion = resolver.suggest(&commands, "esportar", "modulo1");
        assert!(suggestion.is_some_and(|s| s.trigger != "exportar"));
        assert!(resolver.suggest(&commands, "", "modulo1").is_none());
        assert!(resolver.suggest(&[], "inicio", "modulo1").is_none());
    }

    #[test]
    fn utterance_confidence_is_clamped() {
        assert_eq!(Utterance::with_confidence("inicio", 1.7).confidence, Some(1.0));
        assert_eq!(Utterance::with_confidence("inicio", -0.2).confidence, Some(0.0));
        assert_eq!(Utterance::new("inicio").confidence, None);
    }
}
