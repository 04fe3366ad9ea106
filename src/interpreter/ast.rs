use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators understood by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operator {
    /// `+`: append the right operand to the left one.
    Concat,
    /// `-`: remove the first occurrence of the right operand from the left one.
    Strike,
}

impl Operator {
    /// Source symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Concat => '+',
            Operator::Strike => '-',
        }
    }

    /// Recognise a bare operator token. Anything other than a lone `+`/`-` is rejected.
    pub fn from_symbol(text: &str) -> Option<Self> {
        match text {
            "+" => Some(Operator::Concat),
            "-" => Some(Operator::Strike),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// What a token is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TokenKind {
    /// A plain operand word.
    Word(String),
    /// An operator symbol.
    Operator(Operator),
}

/// A token together with the byte offset where it starts in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token payload.
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub offset: usize,
}

impl Token {
    /// Construct a word token.
    pub fn word(text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind: TokenKind::Word(text.into()),
            offset,
        }
    }

    /// Construct an operator token.
    pub fn operator(op: Operator, offset: usize) -> Self {
        Self {
            kind: TokenKind::Operator(op),
            offset,
        }
    }
}
