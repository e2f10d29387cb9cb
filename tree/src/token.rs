//! Tokens and token streams, as seen by the tree layer.
//!
//! The lexer and the real token stream live outside this crate. Trees only
//! need a token's type, its text and its position in the stream, plus the
//! ability to read a span of text back when packaging an error node.

use core::fmt::Debug;

use crate::{String, Vec};

/// Numeric token type code produced by the lexer.
pub type TokenType = i32;

/// Type of nodes that carry no real token (nil and error nodes).
pub const INVALID_TOKEN_TYPE: TokenType = 0;

/// End of input.
pub const EOF: TokenType = -1;

/// First type code available to grammar tokens.
pub const MIN_TOKEN_TYPE: TokenType = 4;

/// What tree nodes need from a token.
pub trait Token: Clone + Debug {
    /// Builds a token that was never seen in the input (an imaginary token
    /// introduced by a rewrite rule).
    fn imaginary(kind: TokenType, text: &str) -> Self;

    fn kind(&self) -> TokenType;

    fn set_kind(&mut self, kind: TokenType);

    fn text(&self) -> Option<&str>;

    fn set_text(&mut self, text: &str);

    /// Position in the token stream, if the token came from one.
    fn index(&self) -> Option<usize>;

    fn set_index(&mut self, index: usize);
}

/// The default token: type, optional text, stream index and source position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommonToken {
    kind: TokenType,
    text: Option<String>,
    index: Option<usize>,
    line: u32,
    column: u32,
}

impl CommonToken {
    pub fn new(kind: TokenType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            index: None,
            line: 0,
            column: 0,
        }
    }

    /// A token with no text, such as a synthesized EOF.
    pub fn without_text(kind: TokenType) -> Self {
        Self {
            kind,
            text: None,
            index: None,
            line: 0,
            column: 0,
        }
    }

    pub fn eof() -> Self {
        Self::without_text(EOF)
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl Token for CommonToken {
    fn imaginary(kind: TokenType, text: &str) -> Self {
        Self::new(kind, text)
    }

    fn kind(&self) -> TokenType {
        self.kind
    }

    fn set_kind(&mut self, kind: TokenType) {
        self.kind = kind;
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.into());
    }

    fn index(&self) -> Option<usize> {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }
}

/// Whether a stream yields raw tokens or the nodes of an already-built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamKind {
    /// Raw token input from a lexer; the parser builds trees from it.
    #[default]
    Tokens,
    /// A serialized walk over an existing tree, consumed by a tree parser.
    Nodes,
}

/// Positional access to the input of a parse.
pub trait TokenStream {
    type Token: Token;

    /// Number of tokens in the stream.
    fn size(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Token>;

    /// Text of the tokens in `start..=stop`, clamped to the end of the stream.
    fn text(&self, start: usize, stop: usize) -> String {
        let mut text = String::new();
        if self.size() == 0 {
            return text;
        }
        let stop = stop.min(self.size() - 1);
        for index in start..=stop {
            if let Some(token) = self.get(index)
                && let Some(piece) = token.text()
            {
                text.push_str(piece);
            }
        }
        text
    }

    fn kind(&self) -> StreamKind {
        StreamKind::Tokens
    }
}

/// A token stream backed by a vector.
///
/// Tokens are renumbered on construction so that `tokens[i].index() == Some(i)`.
#[derive(Debug, Clone)]
pub struct BufferedTokenStream<T: Token> {
    tokens: Vec<T>,
    kind: StreamKind,
}

impl<T: Token> BufferedTokenStream<T> {
    pub fn new(tokens: impl IntoIterator<Item = T>) -> Self {
        let tokens = tokens
            .into_iter()
            .enumerate()
            .map(|(index, mut token)| {
                token.set_index(index);
                token
            })
            .collect();
        Self {
            tokens,
            kind: StreamKind::Tokens,
        }
    }

    /// Marks the stream as a tree-node stream.
    pub fn over_tree(mut self) -> Self {
        self.kind = StreamKind::Nodes;
        self
    }

    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }
}

impl<T: Token> TokenStream for BufferedTokenStream<T> {
    type Token = T;

    fn size(&self) -> usize {
        self.tokens.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.tokens.get(index)
    }

    fn kind(&self) -> StreamKind {
        self.kind
    }
}
