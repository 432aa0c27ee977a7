use thiserror::Error;

use crate::tree::NodeId;

/// Errors raised while building or wiring a navigation tree.
///
/// Navigation itself never fails: once a [`NavTree`](crate::NavTree) is
/// built, ticking it only ever changes focus state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A constructor received a value it cannot work with.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// The [`NodeId`] doesn't point to a live node of this tree.
    #[error("navigation node {0:?} is not part of this tree")]
    UnknownNode(NodeId),

    /// Linking `child` below `parent` would make `parent` reachable from itself.
    #[error("linking {child:?} below {parent:?} would create a navigation cycle")]
    Cycle { parent: NodeId, child: NodeId },
}

impl NavError {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        NavError::InvalidArgument { name, reason }
    }
}
