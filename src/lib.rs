pub mod block;
pub mod docgen;
pub mod doctest;
pub mod scan;
#[cfg(test)]
mod testutil;
pub mod translate;
pub mod txt;

pub use self::{
    doctest::{generate as generate_tests, Outcome},
    docgen::render as generate_docs,
    scan::{ExprSpan, Scanner, Unterminated},
    translate::{translate, Statement, TestUnit, TranslateError, TranslateErrorKind},
    txt::TextSource,
};
use self::{block::BlockError, txt::LineNumber};
use thiserror::Error;

pub const DEFAULT_INDENT: usize = 4;

/// What to do with an expression that runs into end-of-input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Policy {
    Lenient,
    #[default]
    Strict,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Opts {
    pub indent: usize,
    pub policy: Policy,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            policy: Policy::default(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{src}: {source}")]
    Block {
        src: String,
        #[source]
        source: BlockError,
    },
    #[error("{src}:{line}: examples for '{entity}': {source}")]
    Translate {
        src: String,
        line: LineNumber,
        entity: String,
        #[source]
        source: TranslateError,
    },
}

impl Error {
    fn block(src: &TextSource, err: BlockError) -> Self {
        Self::Block {
            src: src.name().to_owned(),
            source: err,
        }
    }

    fn translate(src: &TextSource, entity: &str, offset: usize, err: TranslateError) -> Self {
        Self::Translate {
            src: src.name().to_owned(),
            line: src.lineno(offset + err.span.start),
            entity: entity.to_owned(),
            source: err,
        }
    }
}
