//! Interview level profiles used to steer prompt construction

use crate::domain::partition::PartitionKey;

/// Prompt-steering descriptors for one interview level.
///
/// The partition key stays free-form at the cache layer; profiles only
/// shape the generation prompt for the levels we know about.
#[derive(Debug, Clone)]
pub struct LevelProfile {
    /// Partition key this profile applies to
    key: String,
    /// Human-readable level name used in prompts
    display_name: String,
    /// How hard the questions should be
    difficulty_guidance: String,
    /// How deep the expected answers should go
    depth_guidance: String,
}

impl LevelProfile {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        difficulty_guidance: impl Into<String>,
        depth_guidance: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            difficulty_guidance: difficulty_guidance.into(),
            depth_guidance: depth_guidance.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn difficulty_guidance(&self) -> &str {
        &self.difficulty_guidance
    }

    pub fn depth_guidance(&self) -> &str {
        &self.depth_guidance
    }
}

/// Catalog of known interview levels with a general fallback.
///
/// An unrecognized partition key is not an error anywhere in the
/// system; here it resolves to the fallback profile so generation still
/// produces sensible content for ad hoc levels.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    profiles: Vec<LevelProfile>,
    fallback: LevelProfile,
}

impl LevelCatalog {
    pub fn new(profiles: Vec<LevelProfile>, fallback: LevelProfile) -> Self {
        Self { profiles, fallback }
    }

    /// Resolve a partition key to its profile, or the fallback
    pub fn resolve(&self, partition: &PartitionKey) -> &LevelProfile {
        self.profiles
            .iter()
            .find(|p| p.key() == partition.as_str())
            .unwrap_or(&self.fallback)
    }

    pub fn profiles(&self) -> &[LevelProfile] {
        &self.profiles
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::new(
            vec![
                LevelProfile::new(
                    "entry",
                    "Entry Level",
                    "Focus on fundamentals and core concepts a junior candidate must know.",
                    "Answers should cover the essential idea in a few sentences, without edge cases.",
                ),
                LevelProfile::new(
                    "mid",
                    "Mid Level",
                    "Mix practical scenario questions with applied design decisions.",
                    "Answers should include trade-offs and one concrete example from real work.",
                ),
                LevelProfile::new(
                    "senior",
                    "Senior Level",
                    "Emphasize architecture, scaling, failure modes and leading technical decisions.",
                    "Answers should weigh alternatives, name pitfalls and justify the chosen approach.",
                ),
            ],
            LevelProfile::new(
                "general",
                "General",
                "Cover a balanced range of topics appropriate to the role.",
                "Answers should be clear and complete without assuming a specific seniority.",
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_level() {
        let catalog = LevelCatalog::default();
        let profile = catalog.resolve(&PartitionKey::new("senior"));

        assert_eq!(profile.key(), "senior");
        assert_eq!(profile.display_name(), "Senior Level");
    }

    #[test]
    fn test_resolve_unknown_level_falls_back() {
        let catalog = LevelCatalog::default();
        let profile = catalog.resolve(&PartitionKey::new("staff-plus"));

        assert_eq!(profile.key(), "general");
    }

    #[test]
    fn test_default_catalog_levels() {
        let catalog = LevelCatalog::default();
        let keys: Vec<&str> = catalog.profiles().iter().map(|p| p.key()).collect();

        assert_eq!(keys, vec!["entry", "mid", "senior"]);
    }
}
