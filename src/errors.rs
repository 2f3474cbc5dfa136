use std::fmt;
use thiserror::Error;

/// Which child slot of a node an operation addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Errors reported by tree operations.
///
/// Every variant reflects misuse of the API by the caller. A failed
/// operation performs no mutation: all precondition checks run before any
/// state change, so the tree keeps the state it had before the call.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("root already exists")]
    RootExists,

    #[error("{0} child already exists")]
    ChildOccupied(Side),

    #[error("cannot delete a node with two children")]
    DeleteFullNode,

    #[error("attach target must be a leaf")]
    AttachToNonLeaf,

    #[error("tree is empty")]
    EmptyTree,

    #[error("node is no longer part of this tree")]
    NodeGone,
}

pub type TreeResult<T> = Result<T, TreeError>;
