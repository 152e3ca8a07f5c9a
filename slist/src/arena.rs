//! Index-linked list backed by a `Vec`.
//!
//! Nodes are never removed, so a [`NodeId`] stays valid for the lifetime of
//! the arena that issued it. Links are plain indices, which means a cyclic
//! chain can be built with [`ArenaList::link`]; the traversals below are
//! bounded by the node count and report cycles instead of spinning.

use std::fmt;

use crate::error::ArenaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaNode {
    pub value: i32,
    pub next: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct ArenaList {
    nodes: Vec<ArenaNode>,
    head: Option<NodeId>,
}

impl ArenaList {
    pub fn new() -> ArenaList {
        ArenaList {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Lays the values out so that `NodeId(i)` links to `NodeId(i + 1)`.
    pub fn from_values(values: &[i32]) -> ArenaList {
        let count = values.len();
        let nodes = values
            .iter()
            .enumerate()
            .map(|(i, &value)| ArenaNode {
                value,
                next: (i + 1 < count).then_some(NodeId(i + 1)),
            })
            .collect();

        ArenaList {
            nodes,
            head: (count > 0).then_some(NodeId(0)),
        }
    }

    /// Allocates a node with no successor. It is not reachable until linked.
    pub fn push(&mut self, value: i32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ArenaNode { value, next: None });
        id
    }

    pub fn link(&mut self, from: NodeId, to: Option<NodeId>) -> Result<(), ArenaError> {
        if let Some(to) = to {
            self.node(to)?;
        }
        self.node_mut(from)?.next = to;
        Ok(())
    }

    pub fn set_head(&mut self, head: Option<NodeId>) -> Result<(), ArenaError> {
        if let Some(id) = head {
            self.node(id)?;
        }
        self.head = head;
        Ok(())
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Number of nodes owned by the arena, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn value(&self, id: NodeId) -> Result<i32, ArenaError> {
        self.node(id).map(|node| node.value)
    }

    pub fn next(&self, id: NodeId) -> Result<Option<NodeId>, ArenaError> {
        self.node(id).map(|node| node.next)
    }

    /// Counts the nodes reachable from the head.
    pub fn chain_len(&self) -> Result<usize, ArenaError> {
        let mut steps = 0;
        let mut current = self.head;

        while let Some(id) = current {
            // More steps than nodes means some node was visited twice.
            if steps == self.nodes.len() {
                return Err(ArenaError::Cycle { at: id });
            }
            current = self.node(id)?.next;
            steps += 1;
        }

        Ok(steps)
    }

    /// Reverses the chain reachable from the head in place.
    ///
    /// The chain is checked for cycles first; on error no link has been
    /// touched.
    pub fn reverse(&mut self) -> Result<(), ArenaError> {
        self.chain_len()?;

        let mut previous = None;
        let mut current = self.head;

        while let Some(id) = current {
            let node = self.node_mut(id)?;
            let next_node = node.next;
            node.next = previous;
            previous = Some(id);
            current = next_node;
        }

        self.head = previous;
        Ok(())
    }

    /// Values along the chain. Stops after `len()` steps even if the chain
    /// loops.
    pub fn values(&self) -> ArenaIter<'_> {
        ArenaIter {
            arena: self,
            next: self.head,
            remaining: self.nodes.len(),
        }
    }

    fn node(&self, id: NodeId) -> Result<&ArenaNode, ArenaError> {
        self.nodes.get(id.0).ok_or(ArenaError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut ArenaNode, ArenaError> {
        self.nodes.get_mut(id.0).ok_or(ArenaError::UnknownNode(id))
    }
}

pub struct ArenaIter<'a> {
    arena: &'a ArenaList,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for ArenaIter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.nodes.get(self.next?.0)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(node.value)
    }
}
