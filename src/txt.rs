use std::{fs, io, path::Path};

pub type LineNumber = usize;

/// Source text plus the name it is reported under.
#[derive(Debug)]
pub struct TextSource {
    name: String,
    text: String,
    line_starts: Vec<usize>,
}

impl TextSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self {
            name: name.into(),
            text,
            line_starts,
        }
    }

    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), text))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based line containing the given byte offset.
    #[must_use]
    pub fn lineno(&self, offset: usize) -> LineNumber {
        self.line_starts.partition_point(|&start| start <= offset)
    }
}
