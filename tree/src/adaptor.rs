//! TreeAdaptor trait - the contract generated rule code is written against.
//!
//! Rule actions build trees through this trait only, so the node
//! representation can change without touching rewrite logic:
//! - Construction (`create*`, `empty_node`, `error_node`)
//! - Duplication (`dup_node`, `dup_tree`)
//! - Structural mutation (`add_child`, `become_root`, `replace_children`, ...)
//! - Navigation and content accessors

use core::fmt::Debug;
use core::hash::Hash;

use crate::Result;
use crate::token::{Token, TokenStream, TokenType};

/// Abstraction over AST construction and rewriting.
///
/// # Nil nodes
///
/// A nil node (from [`empty_node`](Self::empty_node)) has no token. It is a
/// temporary list of children: `add_child` and `replace_children` splice its
/// children in place of it, and `become_root` unwraps or flattens it. A nil
/// node is never left behind as the child of another node.
///
/// # Errors
///
/// Every fallible operation checks its arguments before relinking anything,
/// so an `Err` means the tree is exactly as it was.
///
/// # Example
///
/// ```ignore
/// // Rule `r : A B -> ^(A B) ;`
/// fn rule_r<A: TreeAdaptor>(adaptor: &mut A, a: A::Token, b: A::Token) -> Result<Option<A::Node>> {
///     let root_0 = adaptor.empty_node();
///     let root_1 = adaptor.empty_node();
///     let root_1 = adaptor.become_root_token(a, Some(root_1))?;
///     let b = adaptor.create(b);
///     adaptor.add_child(root_1, b)?;
///     adaptor.add_child(root_0, root_1)?;
///     Ok(adaptor.rule_post_processing(root_0))
/// }
/// ```
pub trait TreeAdaptor {
    /// Handle to a node. Handles are only meaningful to the adaptor that
    /// produced them.
    type Node: Copy + Debug + Eq + Hash;

    type Token: Token;

    /// Value describing why an error node was created.
    type Diagnostic;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wraps `payload` in a new node.
    fn create(&mut self, payload: Self::Token) -> Self::Node;

    /// Creates a node from a copy of `from` whose type is replaced by `kind`.
    fn create_from_token(&mut self, kind: TokenType, from: &Self::Token) -> Self::Node;

    /// Creates a node from a copy of `from` with both type and text replaced.
    fn create_from_token_with_text(
        &mut self,
        kind: TokenType,
        from: &Self::Token,
        text: &str,
    ) -> Self::Node;

    /// Creates a node for an imaginary token that never appeared in the input.
    fn create_imaginary(&mut self, kind: TokenType, text: &str) -> Self::Node;

    /// Returns a nil node that can hold a list of children.
    ///
    /// For a flat list use `t = empty_node(); add_child(t, x); add_child(t, y);`.
    fn empty_node(&mut self) -> Self::Node;

    /// Returns a node recording the tokens consumed during error recovery.
    ///
    /// `start` is the token at which the error was detected and `stop` the
    /// last token consumed while resynchronizing. The text in between is read
    /// from `input` now, so the node can be reported later without it.
    ///
    /// Only meaningful while parsing tokens: fails with
    /// [`TreeError::TreeStreamErrorNode`](crate::TreeError::TreeStreamErrorNode)
    /// when `input` is walking an already-built tree.
    fn error_node<S>(
        &mut self,
        input: &S,
        start: &Self::Token,
        stop: &Self::Token,
        diagnostic: Self::Diagnostic,
    ) -> Result<Self::Node>
    where
        S: TokenStream<Token = Self::Token> + ?Sized;

    // ========================================================================
    // Duplication
    // ========================================================================

    /// Copies just the node: same payload, no parent, no children.
    fn dup_node(&mut self, node: Self::Node) -> Self::Node;

    /// Copies the entire subtree, recursively.
    fn dup_tree(&mut self, tree: Self::Node) -> Self::Node;

    // ========================================================================
    // Structure
    // ========================================================================

    /// Is `node` a nil node used to make lists of child nodes?
    fn is_nil(&self, node: Self::Node) -> bool;

    /// Appends `child` to `tree`. A nil `child` contributes its children
    /// instead, in order.
    fn add_child(&mut self, tree: Self::Node, child: Self::Node) -> Result<()>;

    /// Makes `old_root` a child of `new_root`.
    ///
    /// If `old_root` is a nil root its children are moved to the new root
    /// instead. If `new_root` is a nil root with a single child, that child
    /// is the new root. If `old_root` is `None`, `new_root` is returned as
    /// is, even when it is nil.
    ///
    /// Fails with [`TreeError::MalformedRoot`](crate::TreeError::MalformedRoot)
    /// when `new_root` is a nil root without exactly one child.
    fn become_root(
        &mut self,
        new_root: Self::Node,
        old_root: Option<Self::Node>,
    ) -> Result<Self::Node>;

    /// Same as [`become_root`](Self::become_root), creating the new root from
    /// a token.
    fn become_root_token(
        &mut self,
        new_root: Self::Token,
        old_root: Option<Self::Node>,
    ) -> Result<Self::Node> {
        let new_root = self.create(new_root);
        self.become_root(new_root, old_root)
    }

    /// Normalizes the tree built by a rule: a nil root with one child
    /// becomes that child, and a nil root with no children becomes `None`.
    fn rule_post_processing(&mut self, root: Self::Node) -> Option<Self::Node>;

    /// Returns the `i`th child, `0..child_count`.
    fn child(&self, tree: Self::Node, i: usize) -> Result<Self::Node>;

    /// Sets the `i`th child to `child`, which must not be a nil node.
    fn set_child(&mut self, tree: Self::Node, i: usize, child: Self::Node) -> Result<()>;

    /// Removes the `i`th child and shifts the children to its right down.
    fn delete_child(&mut self, tree: Self::Node, i: usize) -> Result<Self::Node>;

    /// How many children? If 0, then this is a leaf node.
    fn child_count(&self, tree: Self::Node) -> usize;

    /// The parent of `node`; `None` for a root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Moves `node` to the end of `parent`'s children, or detaches it when
    /// `parent` is `None`.
    fn set_parent(&mut self, node: Self::Node, parent: Option<Self::Node>) -> Result<()>;

    /// Position of `node` among its siblings; `None` for a root.
    fn child_index(&self, node: Self::Node) -> Option<usize>;

    /// Moves `node` to position `index` among its siblings.
    fn set_child_index(&mut self, node: Self::Node, index: usize) -> Result<()>;

    /// Replaces the children `start..=stop` of `parent` with `with`, or with
    /// the children of `with` when it is a nil node.
    fn replace_children(
        &mut self,
        parent: Self::Node,
        start: usize,
        stop: usize,
        with: Self::Node,
    ) -> Result<()>;

    // ========================================================================
    // Content
    // ========================================================================

    /// Identity of `node` for identity-keyed maps, assigned on first request.
    fn unique_id(&mut self, node: Self::Node) -> usize;

    fn kind(&self, node: Self::Node) -> TokenType;

    fn set_kind(&mut self, node: Self::Node, kind: TokenType) -> Result<()>;

    fn text(&self, node: Self::Node) -> Option<&str>;

    fn set_text(&mut self, node: Self::Node, text: &str) -> Result<()>;

    fn token(&self, node: Self::Node) -> Option<&Self::Token>;

    /// Records the span of tokens covered by `tree`.
    fn set_token_boundaries(
        &mut self,
        tree: Self::Node,
        start: Option<&Self::Token>,
        stop: Option<&Self::Token>,
    );

    fn token_start_index(&self, tree: Self::Node) -> Option<usize>;

    fn token_stop_index(&self, tree: Self::Node) -> Option<usize>;
}
