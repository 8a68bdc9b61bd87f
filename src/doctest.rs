use crate::{
    block::{self, DocBlock},
    translate::{translate, TestUnit, TranslateError},
    Error, Opts, Result, TextSource,
};
use tracing::debug;

const HEADER: &str = concat!("; This test is auto-generated by ", env!("CARGO_PKG_NAME"));

/// Result of turning one documentation block into a test unit.
#[derive(Debug, Eq, PartialEq)]
pub enum Outcome<'a> {
    Skipped(&'a str),
    Unit(TestUnit<'a>),
}

pub fn test_unit<'a>(
    block: &DocBlock<'a>,
    opts: &Opts,
) -> std::result::Result<Outcome<'a>, TranslateError> {
    Ok(match block.examples {
        Some(examples) => Outcome::Unit(translate(block.name, examples.text, opts)?),
        None => Outcome::Skipped(block.name),
    })
}

/// Renders the complete test file for every documented entity in `src`.
pub fn generate(src: &TextSource, opts: &Opts) -> Result<String> {
    let mut out = format!("{HEADER}\n; based on: {}\n", src.name());
    for block in block::blocks(src.text()) {
        let block = block.map_err(|err| Error::block(src, err))?;
        match test_unit(&block, opts).map_err(|err| translate_err(src, &block, err))? {
            Outcome::Skipped(name) => debug!(entity = name, "no examples, skipped"),
            Outcome::Unit(unit) => {
                debug!(
                    entity = unit.name,
                    statements = unit.statements.len(),
                    "generated test unit"
                );
                out.push('\n');
                out.push_str(&unit.display(opts.indent).to_string());
            }
        }
    }
    Ok(out)
}

fn translate_err(src: &TextSource, block: &DocBlock<'_>, err: TranslateError) -> Error {
    let offset = block.examples.map_or(0, |ex| ex.offset);
    Error::translate(src, block.name, offset, err)
}
