//! Test cycle resolution

use std::collections::{BTreeMap, BTreeSet};

/// Decides which test cycles a record is published into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestCycleResolver {
    /// Every result goes to one cycle
    Fixed(String),

    /// Results go to the cycles mapped from the record's tags, or the default
    Tagged {
        default: String,
        by_tag: BTreeMap<String, String>,
    },
}

impl TestCycleResolver {
    /// Cycle used when no tag maps to one
    pub fn default_key(&self) -> &str {
        match self {
            TestCycleResolver::Fixed(key) => key,
            TestCycleResolver::Tagged { default, .. } => default,
        }
    }

    /// Cycles mapped from tags, in tag order, without duplicates.
    ///
    /// Empty for [`TestCycleResolver::Fixed`] and when no tag is mapped.
    pub fn mapped_keys<'a>(&'a self, tags: &BTreeSet<String>) -> Vec<&'a str> {
        let TestCycleResolver::Tagged { by_tag, .. } = self else {
            return Vec::new();
        };

        let mut keys: Vec<&str> = Vec::new();
        for key in tags.iter().filter_map(|tag| by_tag.get(tag)) {
            if !keys.contains(&key.as_str()) {
                keys.push(key.as_str());
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn tagged(pairs: &[(&str, &str)]) -> TestCycleResolver {
        TestCycleResolver::Tagged {
            default: "CYC-0".to_string(),
            by_tag: pairs
                .iter()
                .map(|(t, k)| (t.to_string(), k.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_fixed_ignores_tags() {
        let resolver = TestCycleResolver::Fixed("CYC-9".to_string());
        assert!(resolver.mapped_keys(&tags(&["smoke"])).is_empty());
        assert_eq!(resolver.default_key(), "CYC-9");
    }

    #[test]
    fn test_only_mapped_tags_count() {
        let resolver = tagged(&[("smoke", "CYC-1")]);
        assert_eq!(resolver.mapped_keys(&tags(&["smoke", "regression"])), vec!["CYC-1"]);
    }

    #[test]
    fn test_unmapped_tags_map_to_nothing() {
        let resolver = tagged(&[("smoke", "CYC-1")]);
        assert!(resolver.mapped_keys(&tags(&["regression"])).is_empty());
        assert!(resolver.mapped_keys(&BTreeSet::new()).is_empty());
        assert_eq!(resolver.default_key(), "CYC-0");
    }

    #[test]
    fn test_duplicate_cycles_collapse() {
        let resolver = tagged(&[("api", "CYC-1"), ("smoke", "CYC-1"), ("ui", "CYC-2")]);
        assert_eq!(
            resolver.mapped_keys(&tags(&["ui", "smoke", "api"])),
            vec!["CYC-1", "CYC-2"]
        );
    }
}
