use crate::{block, Error, Result, TextSource};
use std::collections::HashMap;
use tracing::debug;

const INDENT: &str = "    ";

/// Hands out anchor slugs, suffixing repeats with `-1`, `-2`, ...
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slug(&mut self, title: &str) -> String {
        let slug = slugify(title);
        match self.seen.get_mut(&slug) {
            Some(count) => {
                let unique = format!("{slug}-{count}");
                *count += 1;
                unique
            }
            None => {
                self.seen.insert(slug.clone(), 1);
                slug
            }
        }
    }
}

/// Renders a Markdown reference page titled `name` from every documentation
/// block in `src`.
pub fn render(src: &TextSource, name: &str) -> Result<String> {
    let mut slugger = Slugger::new();
    let mut toc = String::new();
    let mut docs = String::new();
    for block in block::blocks(src.text()) {
        let block = block.map_err(|err| Error::block(src, err))?;
        debug!(entity = block.name, "documenting");
        let title = format!(": {}", md_escape(block.name));
        toc.push_str(&format!("* [{title}](#{})\n", slugger.slug(&title)));

        docs.push_str(&format!("---\n\n### {title}\n\n"));
        docs.push_str(&format!("{INDENT}{}\n\n", block.signature));
        docs.push_str(&format!("{}\n\n", block.description.trim()));
        if let Some(examples) = block.examples {
            docs.push_str("Examples:\n\n");
            for line in examples.text.trim().split('\n') {
                if !line.is_empty() {
                    docs.push_str(INDENT);
                    docs.push_str(line);
                }
                docs.push('\n');
            }
            docs.push('\n');
        }
    }
    Ok(format!(
        "# {name}\n\n{}\n\n{}\n",
        toc.trim(),
        docs.trim()
    ))
}

fn slugify(title: &str) -> String {
    title
        .trim()
        .chars()
        .filter_map(|ch| match ch {
            _ if ch.is_alphanumeric() || ch == '-' => Some(ch),
            _ if ch.is_whitespace() => Some('-'),
            _ => None,
        })
        .collect()
}

fn md_escape(s: &str) -> String {
    s.replace('*', "\\*").replace('_', "\\_")
}
