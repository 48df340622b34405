use std::fmt;
use std::io;

use pathviz_core::{GridError, Point};

/// Errors from starting or running a search, or from busy-gated edits.
#[derive(Debug)]
pub enum SearchError {
    /// Another search holds the busy flag.
    Busy,
    /// Start or goal lies outside the grid.
    OutOfBounds(Point),
    /// Start or goal differs from the endpoint the grid has marked.
    NotEndpoint(Point),
    /// The backpointer chain from the goal did not lead back to the start.
    BrokenPath(Point),
    /// A grid edit was refused.
    Grid(GridError),
    /// The search thread could not be started.
    Spawn(io::Error),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "a search is already running"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::NotEndpoint(p) => write!(f, "{p} is not the grid's start or goal"),
            Self::BrokenPath(p) => write!(f, "backpointer chain broken at {p}"),
            Self::Grid(e) => write!(f, "grid edit refused: {e}"),
            Self::Spawn(e) => write!(f, "could not start search thread: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
