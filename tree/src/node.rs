//! The node model.
//!
//! Nodes are stored in a [`NodeArena`](crate::NodeArena) and addressed by
//! [`NodeId`]. The forward edge (`children`) owns; the back edge (`parent`,
//! `child_index`) is lookup-only and is rewritten by the arena whenever a
//! node is relinked.

use crate::token::{INVALID_TOKEN_TYPE, Token, TokenType};
use crate::{Arc, String, Vec};

/// Handle of a node inside its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        let raw: u32 = index.try_into().expect("NodeId overflow");
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Tokens consumed while recovering from a syntax error.
///
/// The erroneous text is captured from the stream when the node is built, so
/// reporting it later does not need the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNode<T, D> {
    pub(crate) start: T,
    pub(crate) stop: T,
    pub(crate) text: String,
    pub(crate) diagnostic: D,
}

impl<T: Token, D> ErrorNode<T, D> {
    /// Token at which the error was detected.
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Last token consumed during recovery.
    pub fn stop(&self) -> &T {
        &self.stop
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn diagnostic(&self) -> &D {
        &self.diagnostic
    }
}

/// What a node carries.
///
/// Copies of an error node share one error record.
#[derive(Debug, PartialEq, Eq)]
pub enum Payload<T, D> {
    /// A list root with no token of its own.
    Nil,
    Token(T),
    Error(Arc<ErrorNode<T, D>>),
}

impl<T: Clone, D> Clone for Payload<T, D> {
    fn clone(&self) -> Self {
        match self {
            Self::Nil => Self::Nil,
            Self::Token(token) => Self::Token(token.clone()),
            Self::Error(error) => Self::Error(Arc::clone(error)),
        }
    }
}

impl<T: Token, D> Payload<T, D> {
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    pub fn token(&self) -> Option<&T> {
        match self {
            Self::Token(token) => Some(token),
            Self::Nil | Self::Error(_) => None,
        }
    }

    pub fn kind(&self) -> TokenType {
        match self {
            Self::Token(token) => token.kind(),
            Self::Nil | Self::Error(_) => INVALID_TOKEN_TYPE,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Token(token) => token.text(),
            Self::Error(error) => Some(error.text()),
            Self::Nil => None,
        }
    }
}

/// A node record.
#[derive(Debug, Clone)]
pub struct NodeData<T, D> {
    pub(crate) payload: Payload<T, D>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) child_index: Option<usize>,
    pub(crate) token_start: Option<usize>,
    pub(crate) token_stop: Option<usize>,
}

impl<T: Token, D> NodeData<T, D> {
    pub(crate) fn new(payload: Payload<T, D>) -> Self {
        Self {
            payload,
            children: Vec::new(),
            parent: None,
            child_index: None,
            token_start: None,
            token_stop: None,
        }
    }

    pub fn payload(&self) -> &Payload<T, D> {
        &self.payload
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child_index(&self) -> Option<usize> {
        self.child_index
    }

    /// First token index covered by this subtree.
    ///
    /// Falls back to the node's own token when boundaries were never set.
    pub fn token_start_index(&self) -> Option<usize> {
        self.token_start.or_else(|| match &self.payload {
            Payload::Token(token) => token.index(),
            Payload::Error(error) => error.start.index(),
            Payload::Nil => None,
        })
    }

    /// Last token index covered by this subtree.
    pub fn token_stop_index(&self) -> Option<usize> {
        self.token_stop.or_else(|| match &self.payload {
            Payload::Token(token) => token.index(),
            Payload::Error(error) => error.stop.index(),
            Payload::Nil => None,
        })
    }
}
