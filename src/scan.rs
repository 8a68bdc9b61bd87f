
use std::{
    fmt::{self, Display, Formatter},
    iter::Peekable,
    ops::Range,
    str::CharIndices,
};

type ScanItem = (usize, char);
type ScanResult = Result<(), Unterminated>;
type ScanChars<'a> = Peekable<CharIndices<'a>>;

/// Which construct ran into end-of-input before it closed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unterminated {
    Form,
    String,
}

impl Display for Unterminated {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Form => "unterminated form",
            Self::String => "unterminated string literal",
        })
    }
}

/// The exact source text of one syntactic unit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExprSpan<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
    pub unterminated: Option<Unterminated>,
}

impl ExprSpan<'_> {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unterminated.is_none()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Cursor over an immutable text buffer that reads one expression at a time.
pub struct Scanner<'a> {
    text: &'a str,
    chars: ScanChars<'a>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    /// Skips leading whitespace and consumes exactly one parenthesized or
    /// bracketed form, string literal, or bare atom. The cursor is left on the
    /// first character past the expression.
    pub fn read_expr(&mut self) -> ExprSpan<'a> {
        self.skip_whitespace();
        let start = self.pos();
        let unterminated = self.unit().err();
        let end = self.pos();
        ExprSpan {
            text: self.lexeme(start..end),
            span: start..end,
            unterminated,
        }
    }

    /// Consumes whitespace and returns how many line breaks it crossed.
    pub fn skip_whitespace(&mut self) -> usize {
        let mut newlines = 0;
        while let Some((_, ch)) = self.chars.next_if(whitespace) {
            if ch == '\n' {
                newlines += 1;
            }
        }
        newlines
    }

    /// Consumes spaces and tabs but stops at a line break.
    pub fn skip_blanks(&mut self) {
        while self.chars.next_if(blank).is_some() { /* consume iterator */ }
    }

    /// Consumes the rest of the current line, leaving the line break.
    pub fn skip_line(&mut self) {
        self.chars.next_until_eq('\n');
    }

    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            for _ in prefix.chars() {
                self.chars.next();
            }
            true
        } else {
            false
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    pub fn rest(&mut self) -> &'a str {
        let pos = self.pos();
        self.lexeme(pos..self.end())
    }

    pub fn pos(&mut self) -> usize {
        let end = self.end();
        self.chars.peek().map_or(end, get_idx)
    }

    pub fn is_eof(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn unit(&mut self) -> ScanResult {
        let Some(ch) = self.peek() else {
            return Ok(());
        };
        match ch {
            _ if is_open(ch) => self.form(),
            '"' => self.string(),
            _ => self.atom(),
        }
    }

    fn form(&mut self) -> ScanResult {
        self.chars.next();
        let mut depth = 1usize;
        while let Some(ch) = self.peek() {
            if ch == '"' {
                self.string()?;
                continue;
            }
            self.chars.next();
            if is_open(ch) {
                depth += 1;
            } else if is_close(ch) {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
        }
        Err(Unterminated::Form)
    }

    fn string(&mut self) -> ScanResult {
        self.chars.next();
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                // NOTE: escapes are not interpreted, only skipped over
                '\\' => {
                    if self.chars.next().is_none() {
                        break;
                    }
                }
                '"' => return Ok(()),
                _ => (),
            }
        }
        Err(Unterminated::String)
    }

    fn atom(&mut self) -> ScanResult {
        while let Some(ch) = self.peek() {
            match ch {
                _ if ch.is_whitespace() => break,
                '"' => self.string()?,
                '.' => {
                    self.chars.next();
                    self.dotted()?;
                }
                _ => {
                    self.chars.next();
                }
            }
        }
        Ok(())
    }

    fn dotted(&mut self) -> ScanResult {
        match self.read_expr().unterminated {
            Some(u) => Err(u),
            None => Ok(()),
        }
    }

    fn lexeme(&self, range: Range<usize>) -> &'a str {
        self.text.get(range).unwrap_or_default()
    }

    fn end(&self) -> usize {
        self.text.len()
    }
}

trait PeekablePred<P> {
    fn next_until(&mut self, predicate: P) -> Option<&ScanItem>;
}

impl<P: Fn(&ScanItem) -> bool> PeekablePred<P> for ScanChars<'_> {
    fn next_until(&mut self, predicate: P) -> Option<&ScanItem> {
        while self.next_if(|item| !predicate(item)).is_some() { /* consume iterator */ }
        self.peek()
    }
}

trait PeekableExt {
    fn next_until_eq(&mut self, ch: char) -> Option<&ScanItem>;
}

impl PeekableExt for ScanChars<'_> {
    fn next_until_eq(&mut self, ch: char) -> Option<&ScanItem> {
        self.next_until(|item| item.1 == ch)
    }
}

fn get_idx(item: &ScanItem) -> usize {
    item.0
}

fn whitespace(item: &ScanItem) -> bool {
    item.1.is_whitespace()
}

fn blank(item: &ScanItem) -> bool {
    item.1 != '\n' && whitespace(item)
}

fn is_open(ch: char) -> bool {
    matches!(ch, '(' | '[')
}

fn is_close(ch: char) -> bool {
    matches!(ch, ')' | ']')
}
