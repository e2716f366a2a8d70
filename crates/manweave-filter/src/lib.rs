//! Structural filter chain for man-page document trees.
//!
//! Converts reference pages written in Markdown into a shape a man-page
//! renderer accepts: recognized section headings are uppercased and lifted
//! to level 1, version-conditional headings are demoted, command names in the
//! Name section are hyphenated, callout markers are removed, and leftover
//! inclusion directives are rejected.
//!
//! # Architecture
//!
//! - [`Document`], [`Block`], [`Inline`]: the tree every pass works on
//! - [`Filter`]: a single pass, driven top-down by [`walk_document`]
//! - [`FilterChain`]: ordered passes built from a [`Profile`]
//! - [`markdown`]: parser and serializer connecting the tree to text
//!
//! # Example
//!
//! ```
//! use manweave_filter::markdown::{
//!     DocumentParser, DocumentSerializer, MarkdownParser, MarkdownSerializer,
//! };
//! use manweave_filter::{Profile, normalize};
//!
//! let source = "## Name\n\n`dotnet build` - Builds a project.\n";
//! let document = MarkdownParser::new().parse(source);
//! let document = normalize(document, &Profile::man()).unwrap();
//!
//! assert_eq!(
//!     MarkdownSerializer.serialize(&document),
//!     "# NAME\n\ndotnet-build - Builds a project.\n"
//! );
//! ```

mod chain;
pub mod consts;
mod error;
pub mod filters;
pub mod markdown;
mod profile;
mod tree;
mod walk;

pub use chain::{FilterChain, normalize};
pub use error::FilterError;
pub use profile::{FilterKind, Profile};
pub use tree::{Block, Document, Inline, plain_text, section_title, tokenize};
pub use walk::{Filter, FilterState, walk_document};
