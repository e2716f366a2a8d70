//! Hyphenated command names in the Name section.
//!
//! Man pages name a subcommand page `dotnet-build`, while the prose writes
//! `` `dotnet build` ``. Inside the Name section the code span is turned into
//! plain hyphenated text so `whatis` and `apropos` index the page name.

use crate::consts::NAME_SECTION;
use crate::error::FilterError;
use crate::tree::{Block, Inline, section_title};
use crate::walk::{Filter, FilterState};

/// Rewrites `` `dotnet build` `` to `dotnet-build` inside the Name section.
///
/// This is the only stateful pass: every header sets
/// [`FilterState::in_name_section`] according to its title, and paragraphs
/// are rewritten only while the flag is set.
#[derive(Clone, Debug)]
pub struct FixCommandNames {
    prefix: String,
}

impl FixCommandNames {
    /// Create the pass for the given command prefix (e.g., `"dotnet "`).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn fix(&self, inline: Inline) -> Inline {
        match inline {
            Inline::Code(text) if text.starts_with(&self.prefix) => {
                Inline::Str(text.replace(' ', "-"))
            }
            Inline::Emph(content) => Inline::Emph(self.fix_all(content)),
            Inline::Strong(content) => Inline::Strong(self.fix_all(content)),
            Inline::Link { target, content } => Inline::Link {
                target,
                content: self.fix_all(content),
            },
            other => other,
        }
    }

    fn fix_all(&self, content: Vec<Inline>) -> Vec<Inline> {
        content.into_iter().map(|inline| self.fix(inline)).collect()
    }
}

impl Filter for FixCommandNames {
    fn name(&self) -> &'static str {
        "fix-command-names"
    }

    fn block(&self, block: Block, state: &mut FilterState) -> Result<Option<Block>, FilterError> {
        match block {
            Block::Header { ref content, .. } => {
                state.in_name_section = section_title(content) == NAME_SECTION;
                Ok(Some(block))
            }
            Block::Paragraph(content) if state.in_name_section => {
                Ok(Some(Block::Paragraph(self.fix_all(content))))
            }
            other => Ok(Some(other)),
        }
    }
}
