use crate::domain::registry::VersionRegistry;
use crate::domain::version::{VersionTuple, COMPONENTS};

/// Compare a candidate against the branch's base version and compute its successor
///
/// `reference` is the branch tuple, whose first unspecified component acts as
/// a wildcard. `other` matches when every component before that wildcard is
/// equal. The result is `reference` with the wildcard slot set to one past the
/// candidate's component, or to `1` when the candidate has nothing there but
/// is itself released.
///
/// Returns `None` for a different base, for a candidate that is neither deeper
/// nor released, and for an exact match with no wildcard left to fill.
///
/// # Example
/// ```
/// # use mkversion::domain::{VersionRegistry, VersionTuple, is_same_base_version};
/// let mut registry = VersionRegistry::new();
/// let released = registry.tag("v1.2GA").unwrap();
/// let branch = VersionTuple::from_parts(&[1]).unwrap();
///
/// let next = is_same_base_version(&registry, &branch, &released).unwrap();
/// assert_eq!(next.to_string(), "1.3");
/// ```
pub fn is_same_base_version(
    registry: &VersionRegistry,
    reference: &VersionTuple,
    other: &VersionTuple,
) -> Option<VersionTuple> {
    for index in 0..COMPONENTS {
        match (reference.get(index), other.get(index)) {
            (None, Some(n)) => return Some(reference.with(index, Some(n.saturating_add(1)))),
            (None, None) if registry.is_ga(other) => return Some(reference.with(index, Some(1))),
            (None, None) => return None,
            (Some(a), Some(b)) if a == b => continue,
            _ => return None,
        }
    }
    None
}
