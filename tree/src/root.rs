//! Root combination: making a matched subtree the child of a new root.
//!
//! Nil nodes are transparent list wrappers here:
//!
//! ```text
//! old=^(nil a b c), new=r        yields ^(r a b c)
//! old=^(a b c),     new=r        yields ^(r ^(a b c))
//! old=^(nil a b c), new=^(nil r) yields ^(r a b c)
//! old=^(a b c),     new=^(nil r) yields ^(r ^(a b c))
//! old=null,         new=r        yields r
//! old=null,         new=^(nil r) yields ^(nil r)
//! ```
//!
//! The last line is deliberate: without an old root the new root is returned
//! untouched, even when it is a nil wrapper that would otherwise be unwrapped.

use tracing::trace;

use crate::arena::NodeArena;
use crate::node::NodeId;
use crate::token::Token;
use crate::{Result, TreeError, vec};

impl<T: Token, D> NodeArena<T, D> {
    pub(crate) fn become_root(
        &mut self,
        new_root: NodeId,
        old_root: Option<NodeId>,
        check_cycles: bool,
    ) -> Result<NodeId> {
        let Some(old_root) = old_root else {
            return Ok(new_root);
        };

        // A nil new root must wrap exactly one node, which becomes the root.
        let root = if self[new_root].payload.is_nil() {
            match self[new_root].children.as_slice() {
                [single] => *single,
                children => {
                    return Err(TreeError::MalformedRoot {
                        children: children.len(),
                    });
                }
            }
        } else {
            new_root
        };

        let old_is_nil = self[old_root].payload.is_nil();
        let incoming = if old_is_nil {
            self[old_root].children.clone()
        } else {
            vec![old_root]
        };
        self.check_attach(root, &incoming, check_cycles)?;

        trace!(
            new_root = new_root.index(),
            root = root.index(),
            old_root = old_root.index(),
            moved = incoming.len(),
            "become_root"
        );

        if root != new_root {
            self.take_children(new_root);
        }
        if old_is_nil {
            self.take_children(old_root);
        }
        for child in incoming {
            self.append(root, child);
        }
        Ok(root)
    }
}
