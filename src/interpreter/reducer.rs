use serde::{Deserialize, Serialize};

use super::operator::apply;
use super::{Operator, ReduceError, Result, Token, TokenKind, tokenize};
use crate::config::ReducerConfig;

/// One applied operation, recorded in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Operator that was applied.
    pub operator: Operator,
    /// Left operand text before the operation.
    pub left: String,
    /// Right operand word.
    pub right: String,
    /// Text produced by the operation.
    pub result: String,
}

/// Outcome of a traced reduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    /// Final reduced text.
    pub value: String,
    /// Every operation applied on the way, in order.
    pub steps: Vec<Step>,
}

/// Folds expressions left-to-right with no precedence.
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    config: ReducerConfig,
}

impl Reducer {
    /// Create a reducer using the given configuration.
    pub fn new(config: ReducerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    /// Reduce `input` to a single string.
    pub fn reduce(&self, input: &str) -> Result<String> {
        self.trace(input).map(|reduction| reduction.value)
    }

    /// Reduce `input`, keeping a record of every applied operation.
    pub fn trace(&self, input: &str) -> Result<Reduction> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ReduceError::EmptyExpression);
        }

        let mut fold = Fold::new(&self.config.separator);
        for token in tokens {
            fold.feed(token)?;
        }
        fold.finish()
    }
}

/// Reduce `input` with the default configuration.
pub fn reduce(input: &str) -> Result<String> {
    Reducer::default().reduce(input)
}

struct Fold<'a> {
    separator: &'a str,
    acc: Option<String>,
    words: Vec<String>,
    pending: Option<(Operator, usize)>,
    steps: Vec<Step>,
}

impl<'a> Fold<'a> {
    fn new(separator: &'a str) -> Self {
        Self {
            separator,
            acc: None,
            words: Vec::new(),
            pending: None,
            steps: Vec::new(),
        }
    }

    fn feed(&mut self, token: Token) -> Result<()> {
        match token.kind {
            TokenKind::Word(word) => match self.pending.take() {
                Some((op, _)) => self.apply(op, word),
                None => {
                    self.words.push(word);
                    Ok(())
                }
            },
            TokenKind::Operator(op) => {
                if let Some((operator, offset)) = self.pending {
                    return Err(ReduceError::MissingOperand { operator, offset });
                }
                self.absorb_words();
                if self.acc.is_none() {
                    return Err(ReduceError::MissingOperand {
                        operator: op,
                        offset: token.offset,
                    });
                }
                self.pending = Some((op, token.offset));
                Ok(())
            }
        }
    }

    fn apply(&mut self, op: Operator, right: String) -> Result<()> {
        self.absorb_words();
        let left = self.acc.take().unwrap_or_default();
        let result = match apply(op, &left, &right, self.separator) {
            Some(result) => result,
            None => {
                return Err(ReduceError::OperandNotFound {
                    needle: right,
                    haystack: left,
                });
            }
        };

        tracing::debug!(%op, left = %left, right = %right, result = %result, "applied step");
        self.acc = Some(result.clone());
        self.steps.push(Step {
            operator: op,
            left,
            right,
            result,
        });
        Ok(())
    }

    /// Move pending words onto the end of the accumulator. An accumulator
    /// emptied by a strike is replaced rather than extended.
    fn absorb_words(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let joined = self.words.join(self.separator);
        self.words.clear();
        self.acc = Some(match self.acc.take() {
            Some(acc) if acc.is_empty() => joined,
            Some(mut acc) => {
                acc.push_str(self.separator);
                acc.push_str(&joined);
                acc
            }
            None => joined,
        });
    }

    fn finish(mut self) -> Result<Reduction> {
        if let Some((operator, offset)) = self.pending {
            return Err(ReduceError::MissingOperand { operator, offset });
        }
        self.absorb_words();
        let value = self.acc.ok_or(ReduceError::EmptyExpression)?;
        Ok(Reduction {
            value,
            steps: self.steps,
        })
    }
}
