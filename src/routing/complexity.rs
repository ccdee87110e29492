//! Rule-based task complexity classification
//!
//! A task is scored against three weighted indicator groups. Each group
//! contributes its weight at most once, no matter how many of its phrases
//! appear. The total score maps onto a [`TaskComplexity`] tier.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Complexity tier of a task, ordered by increasing expected chain length
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskComplexity {
    /// Handled by a single agent
    Simple,
    /// Handed off between two agents
    Medium,
    /// Full supervised delegation cycle
    Complex,
}

impl TaskComplexity {
    /// Score at or above which a task is complex.
    pub const COMPLEX_THRESHOLD: u32 = 3;

    /// Map an indicator score onto a tier.
    pub fn from_score(score: u32) -> Self {
        match score {
            0 => TaskComplexity::Simple,
            s if s >= Self::COMPLEX_THRESHOLD => TaskComplexity::Complex,
            _ => TaskComplexity::Medium,
        }
    }

    /// Upper-case wire name ("SIMPLE", "MEDIUM", "COMPLEX").
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskComplexity::Simple => "SIMPLE",
            TaskComplexity::Medium => "MEDIUM",
            TaskComplexity::Complex => "COMPLEX",
        }
    }
}

impl std::fmt::Display for TaskComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskComplexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(TaskComplexity::Simple),
            "medium" => Ok(TaskComplexity::Medium),
            "complex" => Ok(TaskComplexity::Complex),
            _ => Err(format!("Unknown task complexity: {}", s)),
        }
    }
}

/// A weighted group of indicator phrases
#[derive(Debug, Clone, Copy)]
pub struct IndicatorGroup {
    pub name: &'static str,
    pub weight: u32,
    pub phrases: &'static [&'static str],
}

impl IndicatorGroup {
    /// Returns true if any phrase of the group occurs in lowercased text.
    pub fn matches(&self, normalized: &str) -> bool {
        self.phrases.iter().any(|p| normalized.contains(*p))
    }
}

/// Creation/build intent
pub const CREATION: IndicatorGroup = IndicatorGroup {
    name: "creation",
    weight: 2,
    phrases: &["создать", "построить", "разработать", "implement"],
};

/// Analysis/planning intent
pub const ANALYSIS: IndicatorGroup = IndicatorGroup {
    name: "analysis",
    weight: 1,
    phrases: &["анализ", "план", "архитектура", "analyze"],
};

/// Integration or system-wide scope
pub const INTEGRATION: IndicatorGroup = IndicatorGroup {
    name: "integration",
    weight: 2,
    phrases: &["интеграция", "система", "полный", "complete"],
};

/// All indicator groups, in scoring order.
pub const INDICATOR_GROUPS: [IndicatorGroup; 3] = [CREATION, ANALYSIS, INTEGRATION];

/// Lowercase task text for matching.
pub fn normalize(task: &str) -> String {
    task.to_lowercase()
}

/// Weighted indicator score of already-normalized text.
pub fn score(normalized: &str) -> u32 {
    INDICATOR_GROUPS
        .iter()
        .filter(|group| group.matches(normalized))
        .map(|group| group.weight)
        .sum()
}

/// Classify a task. Total and deterministic; matching is case-insensitive.
pub fn classify(task: &str) -> TaskComplexity {
    TaskComplexity::from_score(score(&normalize(task)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_indicators_is_simple() {
        assert_eq!(classify("привет, как дела"), TaskComplexity::Simple);
        assert_eq!(classify(""), TaskComplexity::Simple);
    }

    #[test]
    fn test_analysis_only_is_medium() {
        assert_eq!(score("нужен анализ"), 1);
        assert_eq!(classify("нужен анализ"), TaskComplexity::Medium);
    }

    #[test]
    fn test_creation_only_is_medium() {
        assert_eq!(score("создать страницу"), 2);
        assert_eq!(classify("Создать страницу"), TaskComplexity::Medium);
    }

    #[test]
    fn test_creation_plus_analysis_is_complex() {
        assert_eq!(classify("создать систему для анализа"), TaskComplexity::Complex);
    }

    #[test]
    fn test_all_groups_score_five() {
        assert_eq!(score("разработать полный план"), 5);
    }

    #[test]
    fn test_group_contributes_once() {
        // Two creation phrases still weigh 2
        assert_eq!(score("создать и построить"), 2);
        assert_eq!(classify("создать и построить"), TaskComplexity::Medium);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify("IMPLEMENT"), classify("implement"));
        assert_eq!(classify("АНАЛИЗ"), TaskComplexity::Medium);
    }

    #[test]
    fn test_substring_matching_hits_inflections() {
        // "планирование" contains "план"
        assert_eq!(score("планирование"), 1);
    }

    #[test]
    fn test_from_score_boundaries() {
        assert_eq!(TaskComplexity::from_score(0), TaskComplexity::Simple);
        assert_eq!(TaskComplexity::from_score(1), TaskComplexity::Medium);
        assert_eq!(TaskComplexity::from_score(2), TaskComplexity::Medium);
        assert_eq!(TaskComplexity::from_score(3), TaskComplexity::Complex);
        assert_eq!(TaskComplexity::from_score(5), TaskComplexity::Complex);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(TaskComplexity::Simple < TaskComplexity::Medium);
        assert!(TaskComplexity::Medium < TaskComplexity::Complex);
    }

    #[test]
    fn test_complexity_serde() {
        let json = serde_json::to_string(&TaskComplexity::Complex).unwrap();
        assert_eq!(json, "\"COMPLEX\"");
        let parsed: TaskComplexity = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(parsed, TaskComplexity::Medium);
    }

    #[test]
    fn test_complexity_from_str() {
        assert_eq!("simple".parse::<TaskComplexity>().unwrap(), TaskComplexity::Simple);
        assert_eq!("COMPLEX".parse::<TaskComplexity>().unwrap(), TaskComplexity::Complex);
        assert!("huge".parse::<TaskComplexity>().is_err());
    }
}
