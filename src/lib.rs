//! Schema resolution for Go-style type declarations.
//!
//! `goshape` walks type declarations in an in-memory syntax forest and
//! produces a normalized, language-agnostic schema model: structs,
//! interfaces, maps, and function signatures with their prefixes
//! (pointer/slice/array), parsed tags, inferred embedding names, and
//! canonical fully-qualified type identities.
//!
//! The surrounding toolchain stays external: a parser/loader materializes
//! the [`ast::Forest`], and a type checker answers canonical-name queries
//! through the [`resolve::NameOracle`] seam. The resolver itself is pure
//! and synchronous; see [`resolve::Resolver`].

pub mod ast;
pub mod error;
pub mod resolve;
pub mod schema;
pub mod walk;

// Re-exports for convenience
pub use error::{Diag, SkipReason};
pub use resolve::{parse_tags, DeclIndex, DeclLookup, NameOracle, Resolver};
pub use schema::{Field, Func, Map, Schema, Tag, Type, TypePrefix, TypePrefixKind};
