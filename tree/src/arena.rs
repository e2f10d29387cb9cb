//! Node storage and the relinking primitives behind every tree mutation.
//!
//! Nodes are never freed while the arena lives. A node that is detached from
//! its parent becomes a root that nothing points at, which is how rewrites
//! "discard" nodes.

use core::ops::{Index, IndexMut};

use crate::node::{NodeData, NodeId, Payload};
use crate::token::Token;
use crate::{Result, TreeError, Vec, format, vec};

#[derive(Debug, Clone)]
pub struct NodeArena<T, D> {
    nodes: Vec<NodeData<T, D>>,
}

impl<T: Token, D> Default for NodeArena<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Token, D> NodeArena<T, D> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Stores a new detached node and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX + 1` nodes.
    pub fn alloc(&mut self, payload: Payload<T, D>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(NodeData::new(payload));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData<T, D>> {
        self.nodes.get(id.index())
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over the strict ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_, T, D> {
        Ancestors {
            arena: self,
            next: self[node].parent,
        }
    }

    /// Is `candidate` the node itself or one of its ancestors?
    pub fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        candidate == node || self.ancestors(node).any(|ancestor| ancestor == candidate)
    }

    // ========================================================================
    // Relinking
    // ========================================================================

    /// Checks that every node in `incoming` may be linked under `parent`.
    pub(crate) fn check_attach(
        &self,
        parent: NodeId,
        incoming: &[NodeId],
        check_cycles: bool,
    ) -> Result<()> {
        for &node in incoming {
            if node == parent {
                return Err(TreeError::SelfChild);
            }
            if check_cycles && self.is_ancestor_or_self(node, parent) {
                return Err(TreeError::Cycle);
            }
        }
        Ok(())
    }

    /// Removes `node` from its parent's children, if it has a parent.
    pub(crate) fn detach(&mut self, node: NodeId) {
        let (Some(parent), Some(index)) = (self[node].parent, self[node].child_index) else {
            return;
        };
        self[parent].children.remove(index);
        self.renumber(parent, index);
        let data = &mut self[node];
        data.parent = None;
        data.child_index = None;
    }

    /// Appends `child` to `parent`, detaching it from wherever it was.
    pub(crate) fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let index = self[parent].children.len();
        self[parent].children.push(child);
        let data = &mut self[child];
        data.parent = Some(parent);
        data.child_index = Some(index);
    }

    /// Takes all children away from `node`, leaving them as detached roots.
    pub(crate) fn take_children(&mut self, node: NodeId) -> Vec<NodeId> {
        let children = core::mem::take(&mut self[node].children);
        for &child in &children {
            let data = &mut self[child];
            data.parent = None;
            data.child_index = None;
        }
        children
    }

    /// Rewrites `parent` and `child_index` of the children of `parent`,
    /// starting at position `from`.
    pub(crate) fn renumber(&mut self, parent: NodeId, from: usize) {
        for index in from..self[parent].children.len() {
            let child = self[parent].children[index];
            let data = &mut self[child];
            data.parent = Some(parent);
            data.child_index = Some(index);
        }
    }

    /// Walks the subtree under `root` and reports the first node whose back
    /// edge disagrees with its position.
    pub fn verify(&self, root: NodeId) -> Result<()> {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for (index, &child) in self[node].children.iter().enumerate() {
                let data = &self[child];
                if data.parent != Some(node) {
                    return Err(TreeError::Inconsistent {
                        node: child,
                        reason: format!("parent is {:?}, expected {:?}", data.parent, node),
                    });
                }
                if data.child_index != Some(index) {
                    return Err(TreeError::Inconsistent {
                        node: child,
                        reason: format!(
                            "child index is {:?}, expected {}",
                            data.child_index, index
                        ),
                    });
                }
                if data.payload.is_nil() {
                    return Err(TreeError::Inconsistent {
                        node: child,
                        reason: "nil node attached as a child".into(),
                    });
                }
                stack.push(child);
            }
        }
        Ok(())
    }
}

impl<T, D> Index<NodeId> for NodeArena<T, D> {
    type Output = NodeData<T, D>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<T, D> IndexMut<NodeId> for NodeArena<T, D> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.index()]
    }
}

/// Iterator over the ancestors of a node. See [`NodeArena::ancestors`].
pub struct Ancestors<'a, T, D> {
    arena: &'a NodeArena<T, D>,
    next: Option<NodeId>,
}

impl<T, D> Iterator for Ancestors<'_, T, D> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.arena[current].parent;
        Some(current)
    }
}
