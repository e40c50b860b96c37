use std::fmt;

/// Non-fatal conditions met while resolving a version.
/// These are reported in verbose mode and never change the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The checked-out branch tracks no upstream, so its local name is used
    NoUpstream { branch: String },
    /// Some tag or branch names matched neither version grammar
    IgnoredNames { kind: &'static str, count: usize },
    /// No tag or branch shares the branch's base version
    NoMatchingCandidates { version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoUpstream { branch } => {
                write!(
                    f,
                    "Branch '{}' has no upstream, using its local name",
                    branch
                )
            }
            BoundaryWarning::IgnoredNames { kind, count } => {
                let plural = if *count == 1 { "" } else { "s" };
                write!(
                    f,
                    "Ignored {} {} name{} without a version",
                    count, kind, plural
                )
            }
            BoundaryWarning::NoMatchingCandidates { version } => {
                write!(
                    f,
                    "No tag or branch shares base version '{}', keeping it as is",
                    version
                )
            }
        }
    }
}
