//! Removal of callout markers such as `[!NOTE]`.

use crate::error::FilterError;
use crate::tree::Inline;
use crate::walk::{Filter, FilterState};

/// Replaces admonition markers with empty text.
///
/// The surrounding quote and paragraph are kept, so `> [!NOTE]` followed by
/// text renders as a plain quoted note.
#[derive(Clone, Debug)]
pub struct StripAdmonitions {
    markers: Vec<String>,
}

impl StripAdmonitions {
    /// Create the pass for the given exact markers.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for StripAdmonitions {
    fn name(&self) -> &'static str {
        "strip-admonitions"
    }

    fn inline(
        &self,
        inline: Inline,
        _state: &mut FilterState,
    ) -> Result<Option<Inline>, FilterError> {
        match inline {
            Inline::Str(text) if self.markers.contains(&text) => {
                Ok(Some(Inline::Str(String::new())))
            }
            other => Ok(Some(other)),
        }
    }
}
