//! Configuration options for tree adaptors.

/// Configuration options for a [`CommonTreeAdaptor`](crate::CommonTreeAdaptor).
///
/// # Example
///
/// ```ignore
/// use sprig_tree::{CommonTreeAdaptor, TreeOptions};
///
/// let adaptor = CommonTreeAdaptor::<sprig_tree::CommonToken, ()>::with_options(TreeOptions {
///     initial_capacity: 64,
///     check_cycles: false,
/// });
/// ```
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Number of node slots reserved up front.
    ///
    /// Default: 1024
    pub initial_capacity: usize,

    /// Walk the ancestors of the attachment point before linking a node, and
    /// refuse links that would make a node its own ancestor.
    ///
    /// Turning this off makes attachment O(1) but leaves cycle avoidance to
    /// the grammar.
    ///
    /// Default: true
    pub check_cycles: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            check_cycles: true,
        }
    }
}
