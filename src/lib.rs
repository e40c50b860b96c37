pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;

pub use domain::VersionTuple;
pub use error::{MkVersionError, Result};
pub use resolver::{Resolution, ResolutionKind, Resolver};
