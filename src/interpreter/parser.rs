use super::{Operator, ReduceError, Result, Token};

/// Split expression source into word and operator tokens.
///
/// Tokens are separated by runs of ASCII whitespace, vertical tab included.
/// A token starting with `+` or `-` must be exactly that symbol; any other
/// token is a word.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tracing::trace!(offset = token.offset, kind = ?token.kind, "token");
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            index: 0,
        }
    }

    fn eof(&self) -> bool {
        self.index >= self.bytes.len()
    }

    fn current(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    fn skip_ws(&mut self) {
        while let Some(ch) = self.current() {
            if is_blank(ch) {
                self.index += 1;
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_ws();
        if self.eof() {
            return Ok(None);
        }

        let start = self.index;
        while let Some(ch) = self.current() {
            if is_blank(ch) {
                break;
            }
            self.index += 1;
        }
        // Stops only on ASCII bytes, so both ends are char boundaries.
        let text = &self.src[start..self.index];

        match text.as_bytes()[0] {
            b'+' | b'-' => match Operator::from_symbol(text) {
                Some(op) => Ok(Some(Token::operator(op, start))),
                None => Err(ReduceError::InvalidOperator {
                    token: text.to_string(),
                    offset: start,
                }),
            },
            _ => Ok(Some(Token::word(text, start))),
        }
    }
}

/// ASCII whitespace, including vertical tab.
fn is_blank(ch: u8) -> bool {
    ch.is_ascii_whitespace() || ch == b'\x0b'
}
