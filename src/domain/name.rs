//! Tag and branch name grammars
//!
//! Tags look like `v1GA`, `v1.2GA`, `v1.2.3GA` or `v1.2.3.4GA`. Branches look
//! like `origin/1.next`, `origin/1.2`, `origin/1.2.x` or `origin/1.2.3-patch`;
//! only the segment after the last `/` is read. Names matching neither grammar
//! are not errors, the parsers simply return `None`.

use crate::domain::version::{VersionTuple, COMPONENTS};
use std::fmt;

/// Trailing marker that classifies a parsed name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// `GA` on a tag: the version is released
    Ga,
    /// `.next` on a branch
    Next,
    /// `.x` on a branch
    X,
    /// `-patch` on a branch
    Patch,
    /// No marker
    Plain,
}

/// Development markers recognised on branch names, checked in this order
const BRANCH_SUFFIXES: [(&str, Suffix); 3] = [
    ("-patch", Suffix::Patch),
    (".next", Suffix::Next),
    (".x", Suffix::X),
];

const TAG_PREFIX: &str = "v";
const TAG_SUFFIX: &str = "GA";

impl Suffix {
    /// Whether the marker denotes an ongoing development line
    pub fn is_development(&self) -> bool {
        matches!(self, Suffix::Next | Suffix::X | Suffix::Patch)
    }

    pub fn is_ga(&self) -> bool {
        matches!(self, Suffix::Ga)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Ga => TAG_SUFFIX,
            Suffix::Next => ".next",
            Suffix::X => ".x",
            Suffix::Patch => "-patch",
            Suffix::Plain => "",
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag or branch name that matched its grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedName {
    pub version: VersionTuple,
    pub suffix: Suffix,
}

impl ParsedName {
    pub fn new(version: VersionTuple, suffix: Suffix) -> Self {
        ParsedName { version, suffix }
    }
}

/// Parse a tag name such as `v1.2GA`
///
/// # Example
/// ```
/// # use mkversion::domain::name::{parse_tag, Suffix};
/// let parsed = parse_tag("v1.2GA").unwrap();
/// assert_eq!(parsed.version.to_string(), "1.2");
/// assert_eq!(parsed.suffix, Suffix::Ga);
/// assert!(parse_tag("release-1.2").is_none());
/// ```
pub fn parse_tag(name: &str) -> Option<ParsedName> {
    let body = name
        .trim()
        .strip_prefix(TAG_PREFIX)?
        .strip_suffix(TAG_SUFFIX)?;
    let version = parse_components(body)?;
    Some(ParsedName::new(version, Suffix::Ga))
}

/// Parse a branch name such as `origin/1.2.next`
///
/// Everything up to the last `/` is ignored; a name without `/` is read as a
/// single segment.
pub fn parse_branch(name: &str) -> Option<ParsedName> {
    let name = name.trim();
    let segment = match name.rfind('/') {
        Some(idx) => &name[idx + 1..],
        None => name,
    };

    let (body, suffix) = BRANCH_SUFFIXES
        .iter()
        .find_map(|(marker, suffix)| segment.strip_suffix(marker).map(|body| (body, *suffix)))
        .unwrap_or((segment, Suffix::Plain));

    let version = parse_components(body)?;
    Some(ParsedName::new(version, suffix))
}

/// Parse 1 to 4 dot-separated non-negative integers
///
/// Each component must be a non-empty run of ASCII digits that fits in a `u32`.
pub fn parse_components(body: &str) -> Option<VersionTuple> {
    let mut parts = Vec::with_capacity(COMPONENTS);
    for part in body.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        parts.push(part.parse::<u32>().ok()?);
    }
    VersionTuple::from_parts(&parts)
}
