use thiserror::Error;

use crate::arena::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("node {0} does not belong to this arena")]
    UnknownNode(NodeId),

    #[error("chain is cyclic, node {at} is reached twice")]
    Cycle { at: NodeId },
}
