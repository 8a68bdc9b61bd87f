#[cfg(test)]
mod tests;

use crate::{
    scan::{ExprSpan, Scanner, Unterminated},
    Opts, Policy,
};
use std::{
    fmt::{self, Display, Formatter},
    ops::Range,
};
use thiserror::Error;
use tracing::warn;

const ASSERT_MARKER: &str = "->";
const COMMENT: char = ';';

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Statement<'a> {
    Assert { expr: &'a str, compare: &'a str },
    Blank,
    Expr(&'a str),
}

impl Display for Statement<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assert { expr, compare } => write!(f, "(asserteq {expr} {compare})"),
            Self::Blank => Ok(()),
            Self::Expr(expr) => f.write_str(expr),
        }
    }
}

/// One generated `test-case` block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestUnit<'a> {
    pub name: &'a str,
    pub statements: Vec<Statement<'a>>,
}

impl<'a> TestUnit<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            statements: Vec::new(),
        }
    }

    #[must_use]
    pub fn display(&self, indent: usize) -> DisplayTestUnit<'_> {
        DisplayTestUnit(self, indent)
    }
}

pub struct DisplayTestUnit<'a>(&'a TestUnit<'a>, usize);

impl Display for DisplayTestUnit<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self(unit, indent) = *self;
        writeln!(f, "(test-case '{} {{", unit.name)?;
        for stmt in &unit.statements {
            if let Statement::Blank = stmt {
                f.write_str("\n")?;
                continue;
            }
            for line in stmt.to_string().split('\n') {
                writeln!(f, "\t{}", reindent(line, indent))?;
            }
        }
        f.write_str("})\n")
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TranslateErrorKind {
    #[error("expected a comparison expression after '->'")]
    MissingComparison,
    #[error("{0}")]
    Unterminated(Unterminated),
}

/// Failure at a byte span of the examples text.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{kind}")]
pub struct TranslateError {
    pub kind: TranslateErrorKind,
    pub span: Range<usize>,
}

pub type TranslateResult<'a> = Result<TestUnit<'a>, TranslateError>;

/// Converts the text of an Examples section into a test unit: plain
/// expressions are replayed as-is and `expr -> compare` pairs become
/// assertions.
pub fn translate<'a>(name: &'a str, examples: &'a str, opts: &Opts) -> TranslateResult<'a> {
    let mut t = Translator {
        pending_blank: false,
        policy: opts.policy,
        scanner: Scanner::new(examples),
        unit: TestUnit::new(name),
    };
    t.run()?;
    Ok(t.unit)
}

struct Translator<'a> {
    pending_blank: bool,
    policy: Policy,
    scanner: Scanner<'a>,
    unit: TestUnit<'a>,
}

impl<'a> Translator<'a> {
    fn run(&mut self) -> Result<(), TranslateError> {
        loop {
            if self.scanner.skip_whitespace() > 1 {
                self.pending_blank = true;
            }
            match self.scanner.peek() {
                None => return Ok(()),
                Some(COMMENT) => self.scanner.skip_line(),
                Some(_) => self.statement()?,
            }
        }
    }

    fn statement(&mut self) -> Result<(), TranslateError> {
        let expr = self.expr()?;
        if expr.is_blank() {
            return Ok(());
        }
        let stmt = if self.at_marker() {
            self.assertion(expr.text)?
        } else {
            Statement::Expr(expr.text)
        };
        self.emit(stmt);
        Ok(())
    }

    fn assertion(&mut self, expr: &'a str) -> Result<Statement<'a>, TranslateError> {
        self.scanner.skip_whitespace();
        let start = self.scanner.pos();
        self.scanner.eat_str(ASSERT_MARKER);
        let marker = start..self.scanner.pos();
        self.scanner.skip_blanks();
        if matches!(self.scanner.peek(), None | Some('\n' | COMMENT)) {
            return self.missing_comparison(expr, marker);
        }
        let compare = self.expr()?;
        Ok(Statement::Assert {
            expr,
            compare: compare.text,
        })
    }

    fn missing_comparison(
        &self,
        expr: &'a str,
        marker: Range<usize>,
    ) -> Result<Statement<'a>, TranslateError> {
        match self.policy {
            Policy::Lenient => {
                warn!(
                    entity = self.unit.name,
                    offset = marker.start,
                    "no comparison after '{ASSERT_MARKER}', replaying expression as-is"
                );
                Ok(Statement::Expr(expr))
            }
            Policy::Strict => Err(TranslateError {
                kind: TranslateErrorKind::MissingComparison,
                span: marker,
            }),
        }
    }

    fn expr(&mut self) -> Result<ExprSpan<'a>, TranslateError> {
        let expr = self.scanner.read_expr();
        match (expr.unterminated, self.policy) {
            (None, _) => Ok(expr),
            (Some(u), Policy::Lenient) => {
                warn!(
                    entity = self.unit.name,
                    offset = expr.span.start,
                    "accepting {u} at end of examples"
                );
                Ok(expr)
            }
            (Some(u), Policy::Strict) => Err(TranslateError {
                kind: TranslateErrorKind::Unterminated(u),
                span: expr.span,
            }),
        }
    }

    fn at_marker(&mut self) -> bool {
        self.scanner.rest().trim_start().starts_with(ASSERT_MARKER)
    }

    fn emit(&mut self, stmt: Statement<'a>) {
        if self.pending_blank && !self.unit.statements.is_empty() {
            self.unit.statements.push(Statement::Blank);
        }
        self.pending_blank = false;
        self.unit.statements.push(stmt);
    }
}

fn reindent(line: &str, width: usize) -> String {
    let body = line.trim_start_matches(' ');
    let spaces = line.len() - body.len();
    let (levels, rem) = match width {
        0 => (0, spaces),
        w => (spaces / w, spaces % w),
    };
    format!("{}{}{body}", "\t".repeat(levels), " ".repeat(rem))
}
