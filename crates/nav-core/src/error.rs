//! Base error type.
//!
//! The routing core itself is total over its inputs and never returns an
//! error; these variants exist for the world model and the harness, which
//! wrap `NavError` as a variant (via `#[from]`) or return it directly from
//! fallible lookups.

use thiserror::Error;

use crate::{AgentId, Coord};

/// The top-level error type for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("no landmark registered at {0}")]
    NoLandmarkAt(Coord),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
