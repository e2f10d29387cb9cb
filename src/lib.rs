//! Sprig - AST construction and rewriting for generated parsers
//!
//! # Overview
//!
//! Code emitted by a parser generator builds its output trees through a
//! [`TreeAdaptor`]. The adaptor is the only thing that knows how nodes are
//! represented, so one set of rule actions works over any tree type.
//!
//! The default adaptor, [`CommonTreeAdaptor`], stores nodes in an arena and
//! hands out [`NodeId`] handles.
//!
//! # Quick Start
//!
//! ```ignore
//! use sprig::{CommonToken, CommonTreeAdaptor, TreeAdaptor};
//!
//! let mut adaptor = CommonTreeAdaptor::<CommonToken, ()>::new();
//!
//! // expr : INT (PLUS^ INT)* ;   on input `1 + 2`
//! let mut root_0 = adaptor.empty_node();
//! let one = adaptor.create(CommonToken::new(5, "1"));
//! adaptor.add_child(root_0, one)?;
//! let plus = adaptor.create(CommonToken::new(4, "+"));
//! root_0 = adaptor.become_root(plus, Some(root_0))?;
//! let two = adaptor.create(CommonToken::new(5, "2"));
//! adaptor.add_child(root_0, two)?;
//!
//! let tree = adaptor.rule_post_processing(root_0).unwrap();
//! assert_eq!(adaptor.to_string_tree(tree), "(+ 1 2)");
//! ```
//!
//! # Nil Nodes
//!
//! A nil node is a list with no token of its own. Adding it as a child adds
//! its children, and `become_root` flattens or unwraps it, so rules can build
//! flat lists and hand them to other rules without extra nesting.

pub use sprig_tree::*;
