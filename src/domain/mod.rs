//! Domain logic - pure version rules independent of git operations

pub mod branch;
pub mod name;
pub mod registry;
pub mod successor;
pub mod version;

pub use branch::BranchContext;
pub use name::{parse_branch, parse_tag, ParsedName, Suffix};
pub use registry::VersionRegistry;
pub use successor::is_same_base_version;
pub use version::VersionTuple;
