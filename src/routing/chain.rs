//! Agent chain construction
//!
//! Turns a task and its complexity tier into an ordered hand-off chain of
//! agent keys. Every key emitted comes from the registry the builder holds.

use super::complexity::TaskComplexity;
use crate::registry::{AgentRegistry, CLAUDE, DASHKA, DEEPSEEK};

/// Coding phrases that trigger the analysis → implementation hand-off for
/// medium tasks, on top of the implementation agent's own keywords.
///
/// Stems catch inflected forms ("реализацией", "программу") that the plain
/// keywords miss under substring matching. Creation verbs such as
/// "разработать" and "implement" are not coding intent on their own.
pub const CODING_HANDOFF_PHRASES: &[&str] = &["implementation", "реализ", "программ"];

/// The fixed intake → analysis → implementation → review cycle.
pub const FULL_CYCLE: [&str; 4] = [DASHKA, CLAUDE, DEEPSEEK, DASHKA];

/// Builds agent chains against a registry
pub struct ChainBuilder<'a> {
    registry: &'a AgentRegistry,
}

impl<'a> ChainBuilder<'a> {
    pub fn new(registry: &'a AgentRegistry) -> Self {
        Self { registry }
    }

    /// Build a chain for already-normalized task text.
    ///
    /// Always returns at least one key.
    pub fn build(&self, normalized: &str, complexity: TaskComplexity) -> Vec<String> {
        match complexity {
            TaskComplexity::Simple => vec![self.best_single_agent(normalized)],
            TaskComplexity::Medium => {
                if self.has_coding_intent(normalized) {
                    vec![CLAUDE.to_string(), DEEPSEEK.to_string()]
                } else {
                    vec![DASHKA.to_string(), CLAUDE.to_string()]
                }
            }
            TaskComplexity::Complex => FULL_CYCLE.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Agent with the most keyword matches. Ties go to the earlier agent in
    /// Registry order; no matches at all falls back to the implementation agent.
    fn best_single_agent(&self, normalized: &str) -> String {
        let mut best: Option<(&str, usize)> = None;
        for agent in self.registry.all() {
            let hits = agent.keyword_matches(normalized);
            if hits == 0 {
                continue;
            }
            match best {
                Some((_, best_hits)) if best_hits >= hits => {}
                _ => best = Some((agent.key.as_str(), hits)),
            }
        }

        best.map(|(key, _)| key.to_string())
            .unwrap_or_else(|| DEEPSEEK.to_string())
    }

    fn has_coding_intent(&self, normalized: &str) -> bool {
        let keyword_hit = self
            .registry
            .lookup(DEEPSEEK)
            .map(|agent| agent.matches_any(normalized))
            .unwrap_or(false);

        keyword_hit
            || CODING_HANDOFF_PHRASES
                .iter()
                .any(|phrase| normalized.contains(*phrase))
    }
}
