//! Core types for trustlate.
//!
//! This crate provides the catalog entry model, the structural parity checker
//! and the [`Registry`] mapping a closed set of languages to their catalogs.
//! Most users depend on the `trustlate` facade instead, which also re-exports
//! the derive macros.

pub mod catalog;
pub mod error;
pub mod language;
pub mod parity;
pub mod path;
pub mod registry;

pub use catalog::{Catalog, EntryKind, EntryShape, EntryValue, Node, Section, Shape, Template};
pub use error::{CatalogError, RegistryError};
pub use language::Language;
pub use parity::{ParityIssue, ParityOptions, ParityReport, check_parity, lint_catalog};
pub use path::KeyPath;
pub use registry::{Registry, UnknownLanguagePolicy};
