//! LISP-style rendering of trees, e.g. `(r a (b c))`.

use core::fmt::Write;

use crate::arena::NodeArena;
use crate::node::{NodeId, Payload};
use crate::token::Token;
use crate::String;

/// Formats a subtree into a string.
pub struct TreeFormatter<'a, T, D> {
    arena: &'a NodeArena<T, D>,
    output: String,
}

impl<'a, T: Token, D> TreeFormatter<'a, T, D> {
    pub fn new(arena: &'a NodeArena<T, D>) -> Self {
        Self {
            arena,
            output: String::new(),
        }
    }

    pub fn format(arena: &'a NodeArena<T, D>, node: NodeId) -> String {
        let mut formatter = Self::new(arena);
        formatter.visit(node);
        formatter.output
    }

    /// Writes the text of a single node, ignoring its children.
    pub fn node_text(&mut self, node: NodeId) {
        let arena = self.arena;
        match &arena[node].payload {
            Payload::Nil => self.output.push_str("nil"),
            Payload::Token(token) => match token.text() {
                Some(text) => self.output.push_str(text),
                None => self.output.push_str("<no text>"),
            },
            Payload::Error(error) => {
                let _ = write!(self.output, "<error: {}>", error.text());
            }
        }
    }

    pub fn visit(&mut self, node: NodeId) {
        let arena = self.arena;
        let data = &arena[node];
        if data.children.is_empty() {
            self.node_text(node);
            return;
        }

        let is_nil = data.payload.is_nil();
        if !is_nil {
            self.output.push('(');
            self.node_text(node);
            self.output.push(' ');
        }
        for (i, &child) in data.children.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            self.visit(child);
        }
        if !is_nil {
            self.output.push(')');
        }
    }
}
