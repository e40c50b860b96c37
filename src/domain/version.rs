use crate::error::{MkVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of components in a version tuple: major, minor, patch, build
pub const COMPONENTS: usize = 4;

/// Partially specified version `(major, minor, patch, build)`
///
/// A `None` component means "unspecified at this level", not zero: `v1GA`
/// is `(1, None, None, None)` while `v1.0GA` is `(1, 0, None, None)`.
/// Ordering is lexicographic with `None` sorting before any number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple([Option<u32>; COMPONENTS]);

impl VersionTuple {
    /// Create a tuple from its four components
    pub const fn new(components: [Option<u32>; COMPONENTS]) -> Self {
        VersionTuple(components)
    }

    /// Build a tuple from up to four leading numbers, leaving the rest unspecified
    ///
    /// Returns `None` when more than four numbers are given.
    pub fn from_parts(parts: &[u32]) -> Option<Self> {
        if parts.len() > COMPONENTS {
            return None;
        }
        let mut components = [None; COMPONENTS];
        for (slot, part) in components.iter_mut().zip(parts) {
            *slot = Some(*part);
        }
        Some(VersionTuple(components))
    }

    pub fn components(&self) -> [Option<u32>; COMPONENTS] {
        self.0
    }

    /// Component at `index`; `None` if unspecified or out of range
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied().flatten()
    }

    /// Copy of this tuple with the component at `index` replaced
    pub fn with(&self, index: usize, value: Option<u32>) -> Self {
        let mut components = self.0;
        components[index] = value;
        VersionTuple(components)
    }

    /// Number of leading specified components
    pub fn depth(&self) -> usize {
        self.0.iter().take_while(|c| c.is_some()).count()
    }
}

impl From<[Option<u32>; COMPONENTS]> for VersionTuple {
    fn from(components: [Option<u32>; COMPONENTS]) -> Self {
        VersionTuple(components)
    }
}

/// Parses a bare dotted version such as `3` or `1.2.0`
///
/// Used for configured versions; tag and branch names go through
/// [`crate::domain::name`] instead.
impl FromStr for VersionTuple {
    type Err = MkVersionError;

    fn from_str(s: &str) -> Result<Self> {
        crate::domain::name::parse_components(s.trim()).ok_or_else(|| {
            MkVersionError::config(format!(
                "Invalid version '{}' - expected 1 to 4 dot-separated numbers",
                s
            ))
        })
    }
}

/// Renders the dotted form with trailing zero and absent components dropped
///
/// Rendering stops at the first `None`. Zeros are held back as a pending
/// `"0."` run and only written once a nonzero component follows them.
impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = String::new();
        for component in self.0 {
            match component {
                None => break,
                Some(0) => sep.push_str("0."),
                Some(n) => {
                    write!(f, "{}{}", sep, n)?;
                    sep = ".".to_string();
                }
            }
        }
        Ok(())
    }
}
