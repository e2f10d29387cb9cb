//! Child-range replacement, used by tree-parser rewrites.

use tracing::trace;

use crate::arena::NodeArena;
use crate::node::NodeId;
use crate::token::Token;
use crate::{Result, TreeError, Vec, vec};

impl<T: Token, D> NodeArena<T, D> {
    /// Replaces `parent.children[start..=stop]` with `with`, or with the
    /// children of `with` when it is a nil node.
    pub(crate) fn replace_children(
        &mut self,
        parent: NodeId,
        start: usize,
        stop: usize,
        with: NodeId,
        check_cycles: bool,
    ) -> Result<()> {
        let count = self[parent].children.len();
        if start > stop || stop >= count {
            return Err(TreeError::RangeOutOfRange { start, stop, count });
        }
        if with == parent {
            return Err(TreeError::SelfChild);
        }

        let with_is_nil = self[with].payload.is_nil();
        let incoming = if with_is_nil {
            self[with].children.clone()
        } else {
            vec![with]
        };
        self.check_attach(parent, &incoming, check_cycles)?;

        trace!(
            parent = parent.index(),
            start,
            stop,
            incoming = incoming.len(),
            "replace_children"
        );

        let removed: Vec<NodeId> = self[parent].children[start..=stop].to_vec();
        if with_is_nil {
            self.take_children(with);
        }

        // Nodes coming from elsewhere (including other positions of `parent`)
        // leave their old place first; the ones sitting left of the range
        // shift it down.
        let shift = incoming
            .iter()
            .filter(|&&node| {
                self[node].parent == Some(parent)
                    && self[node].child_index.is_some_and(|index| index < start)
            })
            .count();
        for &node in &incoming {
            if !removed.contains(&node) {
                self.detach(node);
            }
        }
        let start = start - shift;

        self[parent]
            .children
            .splice(start..start + removed.len(), incoming.iter().copied());
        for node in removed {
            if !incoming.contains(&node) {
                let data = &mut self[node];
                data.parent = None;
                data.child_index = None;
            }
        }
        self.renumber(parent, 0);
        Ok(())
    }
}
