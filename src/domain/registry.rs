//! Classification of version tuples seen during one resolution
//!
//! Parsing a development branch (`.next`, `.x`, `-patch`) records its tuple as
//! a development pattern; parsing a `GA` tag records its tuple as released.
//! The registry is filled while names are parsed and only read afterwards.

use crate::domain::name::{self, ParsedName};
use crate::domain::version::{VersionTuple, COMPONENTS};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct VersionRegistry {
    dev_patterns: HashSet<VersionTuple>,
    ga_tags: HashSet<VersionTuple>,
}

impl VersionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the classification carried by a parsed name's suffix
    pub fn record(&mut self, parsed: &ParsedName) {
        if parsed.suffix.is_development() {
            self.dev_patterns.insert(parsed.version);
        }
        if parsed.suffix.is_ga() {
            self.ga_tags.insert(parsed.version);
        }
    }

    /// Mark a tuple as a development pattern regardless of its name
    pub fn mark_development(&mut self, version: VersionTuple) {
        self.dev_patterns.insert(version);
    }

    /// Parse a tag name and record it when it matches
    pub fn tag(&mut self, tag_name: &str) -> Option<VersionTuple> {
        let parsed = name::parse_tag(tag_name)?;
        self.record(&parsed);
        Some(parsed.version)
    }

    /// Parse a branch name and record it when it matches
    pub fn branch(&mut self, branch_name: &str) -> Option<VersionTuple> {
        let parsed = name::parse_branch(branch_name)?;
        self.record(&parsed);
        Some(parsed.version)
    }

    pub fn is_development(&self, version: &VersionTuple) -> bool {
        self.dev_patterns.contains(version)
    }

    /// Whether this exact tuple carries a GA tag
    pub fn is_ga_tag(&self, version: &VersionTuple) -> bool {
        self.ga_tags.contains(version)
    }

    /// Whether the tuple is released, directly or as a rollup of a coarser GA tag
    ///
    /// A GA tag on `1.2` covers `1.2.0`, `1.2.0.0` and so on, but not `1.2.1`:
    /// walking from the build component towards minor, zero or absent components
    /// collapse to unspecified while the first nonzero one ends the search.
    pub fn is_ga(&self, version: &VersionTuple) -> bool {
        let mut current = *version;
        for index in (1..COMPONENTS).rev() {
            if self.ga_tags.contains(&current) {
                return true;
            }
            if current.get(index).is_some_and(|n| n > 0) {
                return false;
            }
            current = current.with(index, None);
        }
        self.ga_tags.contains(&current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(components: [Option<u32>; COMPONENTS]) -> VersionTuple {
        VersionTuple::new(components)
    }

    #[test]
    fn test_tags_register_as_ga_only() {
        let mut registry = VersionRegistry::new();
        for tag in ["v1GA", "v1.2GA", "v1.2.3GA", "v1.2.3.4GA"] {
            let version = registry.tag(tag).unwrap();
            assert!(registry.is_ga_tag(&version), "tag {}", tag);
            assert!(!registry.is_development(&version), "tag {}", tag);
        }
    }

    #[test]
    fn test_branches_register_development_suffixes_only() {
        let mut registry = VersionRegistry::new();
        let plain = registry.branch("origin/1.2").unwrap();
        assert!(!registry.is_development(&plain));

        let mut registry = VersionRegistry::new();
        for name in ["origin/1.2.x", "origin/1.2.next", "origin/1.2-patch"] {
            let version = registry.branch(name).unwrap();
            assert!(registry.is_development(&version), "branch {}", name);
            assert!(!registry.is_ga_tag(&version), "branch {}", name);
        }
    }

    #[test]
    fn test_same_tuple_in_both_sets() {
        let mut registry = VersionRegistry::new();
        let from_tag = registry.tag("v1.2GA").unwrap();
        let from_branch = registry.branch("origin/1.2.x").unwrap();
        assert_eq!(from_tag, from_branch);
        assert!(registry.is_ga_tag(&from_tag));
        assert!(registry.is_development(&from_tag));
    }

    #[test]
    fn test_unmatched_names_leave_registry_untouched() {
        let mut registry = VersionRegistry::new();
        assert!(registry.tag("nightly").is_none());
        assert!(registry.branch("origin/master").is_none());
        assert!(!registry.is_ga(&v([Some(1), None, None, None])));
    }

    #[test]
    fn test_is_ga_rolls_up_zero_components() {
        let mut registry = VersionRegistry::new();
        registry.tag("v1.2GA");

        assert!(registry.is_ga(&v([Some(1), Some(2), None, None])));
        assert!(registry.is_ga(&v([Some(1), Some(2), Some(0), None])));
        assert!(registry.is_ga(&v([Some(1), Some(2), Some(0), Some(0)])));
        assert!(!registry.is_ga(&v([Some(1), Some(2), Some(1), Some(0)])));
        assert!(!registry.is_ga(&v([Some(1), Some(2), Some(0), Some(1)])));
        assert!(!registry.is_ga(&v([Some(1), Some(3), None, None])));
    }

    #[test]
    fn test_is_ga_does_not_roll_down() {
        let mut registry = VersionRegistry::new();
        registry.tag("v1.2.3GA");

        assert!(registry.is_ga(&v([Some(1), Some(2), Some(3), Some(0)])));
        assert!(!registry.is_ga(&v([Some(1), Some(2), None, None])));
        assert!(!registry.is_ga(&v([Some(1), None, None, None])));
    }

    #[test]
    fn test_is_ga_major_only() {
        let mut registry = VersionRegistry::new();
        registry.tag("v2GA");

        assert!(registry.is_ga(&v([Some(2), None, None, None])));
        assert!(registry.is_ga(&v([Some(2), Some(0), Some(0), Some(0)])));
        assert!(!registry.is_ga(&v([Some(2), Some(1), None, None])));
    }

    #[test]
    fn test_mark_development() {
        let mut registry = VersionRegistry::new();
        let trunk = v([Some(3), None, None, None]);
        registry.mark_development(trunk);
        assert!(registry.is_development(&trunk));
        assert!(!registry.is_ga(&trunk));
    }
}
