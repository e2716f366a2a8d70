//! Built-in filter passes.
//!
//! Each pass is independent and idempotent on its own output. Profiles
//! select which passes run and in what order.

mod admonitions;
mod command_names;
mod includes;
mod links;
mod sections;
mod versioned;

pub use admonitions::StripAdmonitions;
pub use command_names::FixCommandNames;
pub use includes::{BlankIncludes, RejectIncludes};
pub use links::FlattenLinks;
pub use sections::PromoteSections;
pub use versioned::DemoteVersioned;
