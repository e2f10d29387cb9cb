//! Tree construction and rewriting for generated parsers.
//!
//! Rule actions emitted by a parser generator never touch tree nodes
//! directly. They go through a [`TreeAdaptor`], which knows how to create
//! nodes, hang them under each other and rewrite them, so the same rule code
//! works over any node representation.
//!
//! The default adaptor, [`CommonTreeAdaptor`], keeps its nodes in an arena
//! and hands out copyable [`NodeId`] handles.
//!
//! # Example
//!
//! ```ignore
//! use sprig_tree::{CommonToken, CommonTreeAdaptor, TreeAdaptor};
//!
//! let mut adaptor = CommonTreeAdaptor::<CommonToken, ()>::new();
//!
//! // Rule `a : A B C -> ^(A B C) ;`
//! let root = adaptor.empty_node();
//! let a = adaptor.create(CommonToken::new(4, "A"));
//! let b = adaptor.create(CommonToken::new(5, "B"));
//! let c = adaptor.create(CommonToken::new(6, "C"));
//!
//! let root_1 = adaptor.empty_node();
//! let root_1 = adaptor.become_root(a, Some(root_1))?;
//! adaptor.add_child(root_1, b)?;
//! adaptor.add_child(root_1, c)?;
//! adaptor.add_child(root, root_1)?;
//!
//! let tree = adaptor.rule_post_processing(root).unwrap();
//! assert_eq!(adaptor.to_string_tree(tree), "(A B C)");
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{
    boxed::Box, format, string::String, string::ToString, sync::Arc, vec, vec::Vec,
};

pub mod adaptor;
pub mod arena;
pub mod common;
pub mod display;
mod dup;
pub mod error;
pub mod node;
pub mod options;
mod replace;
mod root;
pub mod token;

pub use adaptor::TreeAdaptor;
pub use arena::NodeArena;
pub use common::CommonTreeAdaptor;
pub use display::TreeFormatter;
pub use error::{ErrorKind, Result, TreeError};
pub use node::{ErrorNode, NodeData, NodeId, Payload};
pub use options::TreeOptions;
pub use token::{
    BufferedTokenStream, CommonToken, EOF, INVALID_TOKEN_TYPE, MIN_TOKEN_TYPE, StreamKind, Token,
    TokenStream, TokenType,
};
