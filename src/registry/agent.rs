//! Agent definitions and the built-in agent table.

use serde::{Deserialize, Serialize};

/// Key of the coordination agent.
pub const DASHKA: &str = "dashka";
/// Key of the analysis agent.
pub const CLAUDE: &str = "claude";
/// Key of the implementation agent.
pub const DEEPSEEK: &str = "deepseek";

/// A named specialist that tasks can be delegated to.
///
/// Keywords are stored lowercased so they can be matched directly against
/// normalized task text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identity key (e.g. "dashka")
    pub key: String,
    /// Human-readable display name
    pub name: String,
    /// One-line role description, used when explaining routing decisions
    pub description: String,
    /// Declared skills, in declaration order
    pub skills: Vec<String>,
    /// Trigger keywords (lowercase, substring-matched)
    pub keywords: Vec<String>,
}

impl Agent {
    /// Create an agent with no skills or keywords.
    pub fn new(key: &str, name: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            skills: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Set the declared skills.
    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the trigger keywords. Keywords are lowercased.
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        self
    }

    /// Count how many distinct keywords occur in already-lowercased text.
    pub fn keyword_matches(&self, normalized: &str) -> usize {
        self.keywords
            .iter()
            .filter(|kw| normalized.contains(kw.as_str()))
            .count()
    }

    /// Returns true if any keyword occurs in already-lowercased text.
    pub fn matches_any(&self, normalized: &str) -> bool {
        self.keyword_matches(normalized) > 0
    }
}

/// The three built-in agents in declaration order.
///
/// Declaration order is significant: it is the Registry order used for
/// tie-breaking during single-agent selection.
pub fn builtin_agents() -> Vec<Agent> {
    vec![
        Agent::new(DASHKA, "Dashka", "coordination and project management")
            .with_skills(&[
                "coordination",
                "ui_design",
                "project_management",
                "presentation",
            ])
            .with_keywords(&["координация", "ui", "дизайн", "интерфейс", "управление"]),
        Agent::new(CLAUDE, "Claude", "analysis and architectural planning")
            .with_skills(&["analysis", "architecture", "planning", "documentation"])
            .with_keywords(&["анализ", "архитектура", "план", "структура", "документация"]),
        Agent::new(
            DEEPSEEK,
            "DeepSeek",
            "technical implementation and development",
        )
        .with_skills(&["coding", "implementation", "debugging", "optimization"])
        .with_keywords(&["код", "программирование", "реализация", "разработка", "баг"]),
    ]
}
