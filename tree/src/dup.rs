use crate::arena::NodeArena;
use crate::node::{NodeData, NodeId};
use crate::token::Token;
use crate::vec;

impl<T: Token, D> NodeArena<T, D> {
    /// Copies the payload and token boundaries of `node`, nothing else.
    pub(crate) fn dup_node(&mut self, node: NodeId) -> NodeId {
        let source = &self[node];
        let payload = source.payload.clone();
        let (token_start, token_stop) = (source.token_start, source.token_stop);
        let copy = self.alloc(payload);
        let data: &mut NodeData<T, D> = &mut self[copy];
        data.token_start = token_start;
        data.token_stop = token_stop;
        copy
    }

    /// Copies the whole subtree under `tree`. The copy is a detached root.
    pub(crate) fn dup_tree(&mut self, tree: NodeId) -> NodeId {
        let root = self.dup_node(tree);
        let mut pending = vec![(tree, root)];
        while let Some((source, copy)) = pending.pop() {
            for index in 0..self[source].children.len() {
                let child = self[source].children[index];
                let child_copy = self.dup_node(child);
                self.append(copy, child_copy);
                pending.push((child, child_copy));
            }
        }
        root
    }
}
