//! The default tree adaptor, backed by a [`NodeArena`].

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::adaptor::TreeAdaptor;
use crate::arena::{Ancestors, NodeArena};
use crate::display::TreeFormatter;
use crate::node::{ErrorNode, NodeId, Payload};
use crate::options::TreeOptions;
use crate::token::{CommonToken, EOF, StreamKind, Token, TokenStream, TokenType};
use crate::{Arc, Result, String, TreeError};

/// Tree adaptor that stores every node it creates in its own arena.
///
/// `T` is the token type and `D` the diagnostic carried by error nodes.
///
/// # Example
///
/// ```ignore
/// use sprig_tree::{CommonToken, CommonTreeAdaptor, TreeAdaptor};
///
/// let mut adaptor = CommonTreeAdaptor::<CommonToken, ()>::new();
/// let plus = adaptor.create_imaginary(10, "+");
/// let one = adaptor.create_imaginary(11, "1");
/// let root = adaptor.become_root(plus, Some(one))?;
/// assert_eq!(adaptor.to_string_tree(root), "(+ 1)");
/// ```
#[derive(Debug, Clone)]
pub struct CommonTreeAdaptor<T: Token = CommonToken, D = ()> {
    arena: NodeArena<T, D>,
    options: TreeOptions,
    unique_ids: HashMap<NodeId, usize>,
}

impl<T: Token, D> Default for CommonTreeAdaptor<T, D> {
    fn default() -> Self {
        Self::with_options(TreeOptions::default())
    }
}

impl<T: Token, D> CommonTreeAdaptor<T, D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            arena: NodeArena::with_capacity(options.initial_capacity),
            options,
            unique_ids: HashMap::new(),
        }
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Read access to the node storage.
    pub fn arena(&self) -> &NodeArena<T, D> {
        &self.arena
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.arena[node].children
    }

    /// The error record of `node`, if it is an error node.
    pub fn error(&self, node: NodeId) -> Option<&ErrorNode<T, D>> {
        match &self.arena[node].payload {
            Payload::Error(error) => Some(&**error),
            Payload::Nil | Payload::Token(_) => None,
        }
    }

    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_, T, D> {
        self.arena.ancestors(node)
    }

    /// Nearest ancestor of `node` with token type `kind`.
    pub fn ancestor(&self, node: NodeId, kind: TokenType) -> Option<NodeId> {
        self.ancestors(node)
            .find(|&ancestor| self.arena[ancestor].payload.kind() == kind)
    }

    pub fn has_ancestor(&self, node: NodeId, kind: TokenType) -> bool {
        self.ancestor(node, kind).is_some()
    }

    pub fn first_child_with_type(&self, node: NodeId, kind: TokenType) -> Option<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .find(|&child| self.arena[child].payload.kind() == kind)
    }

    /// Renders the subtree under `node` as `(root child ...)`.
    pub fn to_string_tree(&self, node: NodeId) -> String {
        TreeFormatter::format(&self.arena, node)
    }

    /// Checks parent and child-index bookkeeping below `root`.
    pub fn verify(&self, root: NodeId) -> Result<()> {
        self.arena.verify(root)
    }

    fn check_index(&self, tree: NodeId, index: usize) -> Result<()> {
        let count = self.arena[tree].children.len();
        if index >= count {
            return Err(TreeError::IndexOutOfRange { index, count });
        }
        Ok(())
    }

    fn token_mut(&mut self, node: NodeId) -> Result<&mut T> {
        match &mut self.arena[node].payload {
            Payload::Token(token) => Ok(token),
            Payload::Nil | Payload::Error(_) => Err(TreeError::NoToken),
        }
    }
}

impl<T: Token, D> TreeAdaptor for CommonTreeAdaptor<T, D> {
    type Node = NodeId;
    type Token = T;
    type Diagnostic = D;

    // ========================================================================
    // Construction
    // ========================================================================

    fn create(&mut self, payload: T) -> NodeId {
        self.arena.alloc(Payload::Token(payload))
    }

    fn create_from_token(&mut self, kind: TokenType, from: &T) -> NodeId {
        let mut token = from.clone();
        token.set_kind(kind);
        self.create(token)
    }

    fn create_from_token_with_text(&mut self, kind: TokenType, from: &T, text: &str) -> NodeId {
        let mut token = from.clone();
        token.set_kind(kind);
        token.set_text(text);
        self.create(token)
    }

    fn create_imaginary(&mut self, kind: TokenType, text: &str) -> NodeId {
        self.create(T::imaginary(kind, text))
    }

    fn empty_node(&mut self) -> NodeId {
        self.arena.alloc(Payload::Nil)
    }

    fn error_node<S>(&mut self, input: &S, start: &T, stop: &T, diagnostic: D) -> Result<NodeId>
    where
        S: TokenStream<Token = T> + ?Sized,
    {
        if input.kind() == StreamKind::Nodes {
            return Err(TreeError::TreeStreamErrorNode);
        }

        // A stop token before the start token (other than EOF) collapses the
        // span to the start token.
        let stop = match (start.index(), stop.index()) {
            (Some(first), Some(last)) if last < first && stop.kind() != EOF => start,
            _ => stop,
        };
        let text = match start.index() {
            None => String::from("<unknown>"),
            Some(first) => {
                let last = if stop.kind() == EOF {
                    input.size()
                } else {
                    stop.index().unwrap_or(first)
                };
                input.text(first, last)
            }
        };

        debug!(
            start = ?start.index(),
            stop = ?stop.index(),
            text = %text,
            "error_node"
        );

        Ok(self.arena.alloc(Payload::Error(Arc::new(ErrorNode {
            start: start.clone(),
            stop: stop.clone(),
            text,
            diagnostic,
        }))))
    }

    // ========================================================================
    // Duplication
    // ========================================================================

    fn dup_node(&mut self, node: NodeId) -> NodeId {
        self.arena.dup_node(node)
    }

    fn dup_tree(&mut self, tree: NodeId) -> NodeId {
        self.arena.dup_tree(tree)
    }

    // ========================================================================
    // Structure
    // ========================================================================

    fn is_nil(&self, node: NodeId) -> bool {
        self.arena[node].payload.is_nil()
    }

    fn add_child(&mut self, tree: NodeId, child: NodeId) -> Result<()> {
        if child == tree {
            return Err(TreeError::SelfChild);
        }
        if self.is_nil(child) {
            let incoming = self.arena[child].children.clone();
            self.arena
                .check_attach(tree, &incoming, self.options.check_cycles)?;
            for grandchild in self.arena.take_children(child) {
                self.arena.append(tree, grandchild);
            }
        } else {
            self.arena
                .check_attach(tree, &[child], self.options.check_cycles)?;
            self.arena.append(tree, child);
        }
        Ok(())
    }

    fn become_root(&mut self, new_root: NodeId, old_root: Option<NodeId>) -> Result<NodeId> {
        self.arena
            .become_root(new_root, old_root, self.options.check_cycles)
    }

    fn rule_post_processing(&mut self, root: NodeId) -> Option<NodeId> {
        if !self.is_nil(root) {
            return Some(root);
        }
        let result = match self.arena[root].children.as_slice() {
            [] => None,
            [single] => {
                let single = *single;
                self.arena.detach(single);
                Some(single)
            }
            _ => Some(root),
        };
        trace!(root = root.index(), result = ?result, "rule_post_processing");
        result
    }

    fn child(&self, tree: NodeId, i: usize) -> Result<NodeId> {
        self.check_index(tree, i)?;
        Ok(self.arena[tree].children[i])
    }

    fn set_child(&mut self, tree: NodeId, i: usize, child: NodeId) -> Result<()> {
        self.check_index(tree, i)?;
        if self.is_nil(child) {
            return Err(TreeError::NilChild);
        }
        self.arena
            .check_attach(tree, &[child], self.options.check_cycles)?;

        let displaced = self.arena[tree].children[i];
        if displaced == child {
            return Ok(());
        }
        // `child` may be a sibling to the left, in which case the slot moves
        // down once it leaves.
        let index = match (self.arena[child].parent, self.arena[child].child_index) {
            (Some(parent), Some(current)) if parent == tree && current < i => i - 1,
            _ => i,
        };
        self.arena.detach(child);
        self.arena[tree].children[index] = child;
        let data = &mut self.arena[displaced];
        data.parent = None;
        data.child_index = None;
        let data = &mut self.arena[child];
        data.parent = Some(tree);
        data.child_index = Some(index);
        Ok(())
    }

    fn delete_child(&mut self, tree: NodeId, i: usize) -> Result<NodeId> {
        self.check_index(tree, i)?;
        let child = self.arena[tree].children[i];
        self.arena.detach(child);
        Ok(child)
    }

    fn child_count(&self, tree: NodeId) -> usize {
        self.arena[tree].children.len()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena[node].parent
    }

    fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) -> Result<()> {
        match parent {
            None => self.arena.detach(node),
            Some(parent) => {
                if self.is_nil(node) {
                    return Err(TreeError::NilChild);
                }
                self.arena
                    .check_attach(parent, &[node], self.options.check_cycles)?;
                self.arena.append(parent, node);
            }
        }
        Ok(())
    }

    fn child_index(&self, node: NodeId) -> Option<usize> {
        self.arena[node].child_index
    }

    fn set_child_index(&mut self, node: NodeId, index: usize) -> Result<()> {
        let data = &self.arena[node];
        let (Some(parent), Some(current)) = (data.parent, data.child_index) else {
            return Err(TreeError::NoParent);
        };
        self.check_index(parent, index)?;
        let children = &mut self.arena[parent].children;
        let moved = children.remove(current);
        children.insert(index, moved);
        self.arena.renumber(parent, current.min(index));
        Ok(())
    }

    fn replace_children(
        &mut self,
        parent: NodeId,
        start: usize,
        stop: usize,
        with: NodeId,
    ) -> Result<()> {
        self.arena
            .replace_children(parent, start, stop, with, self.options.check_cycles)
    }

    // ========================================================================
    // Content
    // ========================================================================

    fn unique_id(&mut self, node: NodeId) -> usize {
        let next = self.unique_ids.len();
        *self.unique_ids.entry(node).or_insert(next)
    }

    fn kind(&self, node: NodeId) -> TokenType {
        self.arena[node].payload.kind()
    }

    fn set_kind(&mut self, node: NodeId, kind: TokenType) -> Result<()> {
        self.token_mut(node)?.set_kind(kind);
        Ok(())
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.arena[node].payload.text()
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        self.token_mut(node)?.set_text(text);
        Ok(())
    }

    fn token(&self, node: NodeId) -> Option<&T> {
        self.arena[node].payload.token()
    }

    fn set_token_boundaries(&mut self, tree: NodeId, start: Option<&T>, stop: Option<&T>) {
        let data = &mut self.arena[tree];
        data.token_start = start.and_then(|token| token.index());
        data.token_stop = stop.and_then(|token| token.index());
    }

    fn token_start_index(&self, tree: NodeId) -> Option<usize> {
        self.arena[tree].token_start_index()
    }

    fn token_stop_index(&self, tree: NodeId) -> Option<usize> {
        self.arena[tree].token_stop_index()
    }
}
