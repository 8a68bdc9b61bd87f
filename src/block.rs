use crate::txt::LineNumber;
use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};
use thiserror::Error;

static DOC_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^/\*\n(@.+?)^\*/").expect("valid doc block regex"));
static EXAMPLES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Examples:\n").expect("valid examples regex"));

#[derive(Debug, Error, Eq, PartialEq)]
pub enum BlockError {
    #[error("line {line}: signature '{signature}' does not begin with a parenthesized name")]
    MissingName { line: LineNumber, signature: String },
}

/// A region of source text starting at `offset`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Section<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// One `/*\n@...\n*/` documentation comment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocBlock<'a> {
    pub body: &'a str,
    pub description: &'a str,
    pub examples: Option<Section<'a>>,
    pub line: LineNumber,
    pub name: &'a str,
    pub signature: &'a str,
}

impl<'a> DocBlock<'a> {
    fn parse(body: &'a str, offset: usize, line: LineNumber) -> Result<Self, BlockError> {
        let (first, rest) = body.split_once('\n').unwrap_or((body, ""));
        let signature = first.trim_start_matches('@').trim();
        let name = entity_name(signature).ok_or_else(|| BlockError::MissingName {
            line,
            signature: signature.to_owned(),
        })?;
        let rest_offset = offset + body.len() - rest.len();
        let (description, examples) = match EXAMPLES.find(rest) {
            Some(m) => (
                &rest[..m.start()],
                Some(Section {
                    text: &rest[m.end()..],
                    offset: rest_offset + m.end(),
                }),
            ),
            None => (rest, None),
        };
        Ok(Self {
            body,
            description,
            examples,
            line,
            name,
            signature,
        })
    }
}

/// Iterates the documentation blocks of a source file in order.
pub struct Blocks<'a> {
    cursor: usize,
    lineno: LineNumber,
    matches: CaptureMatches<'static, 'a>,
    src: &'a str,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Result<DocBlock<'a>, BlockError>;

    fn next(&mut self) -> Option<Self::Item> {
        let body = self.matches.next()?.get(1)?;
        self.lineno += self.src[self.cursor..body.start()].matches('\n').count();
        self.cursor = body.start();
        Some(DocBlock::parse(body.as_str(), body.start(), self.lineno))
    }
}

#[must_use]
pub fn blocks(src: &str) -> Blocks<'_> {
    Blocks {
        cursor: 0,
        lineno: 1,
        matches: DOC_BLOCK.captures_iter(src),
        src,
    }
}

fn entity_name(signature: &str) -> Option<&str> {
    let name = signature
        .strip_prefix('(')?
        .split(|ch: char| ch.is_whitespace() || ch == ')')
        .next()?;
    (!name.is_empty()).then_some(name)
}
