//! Translation catalogs checked by the compiler.
//!
//! Each language is a `static` value of one catalog struct, so a missing entry
//! or a template with the wrong parameters is a type error. Derive
//! [`Catalog`] on the root struct and [`Section`] on the nested ones, then map
//! every language to its catalog with a [`Registry`].
//!
//! ```
//! use trustlate::{Catalog, Registry, Section};
//!
//! #[derive(Section)]
//! pub struct Home {
//!     pub title: &'static str,
//!     pub greeting: fn(name: &str) -> String,
//! }
//!
//! #[derive(Catalog)]
//! pub struct Texts {
//!     pub home: Home,
//! }
//!
//! #[derive(
//!     Clone, Copy, Debug, Default, Eq, Hash, PartialEq,
//!     strum::Display, strum::EnumIter, strum::IntoStaticStr,
//! )]
//! #[strum(serialize_all = "lowercase")]
//! pub enum Lang {
//!     #[default]
//!     En,
//!     Es,
//! }
//!
//! impl trustlate::Language for Lang {}
//!
//! static EN: Texts = Texts {
//!     home: Home { title: "Home", greeting: |name| format!("Hi {name}") },
//! };
//! static ES: Texts = Texts {
//!     home: Home { title: "Inicio", greeting: |name| format!("Hola {name}") },
//! };
//!
//! let registry = Registry::from_fn(|lang: Lang| match lang {
//!     Lang::En => &EN,
//!     Lang::Es => &ES,
//! });
//!
//! assert_eq!(registry.resolve(Lang::Es).home.greeting("Ana"), "Hola Ana");
//! assert!(registry.validate(&Default::default()).is_ok());
//! ```

#[cfg(feature = "derive")]
pub use trustlate_derive::{Catalog, Section};

pub use trustlate_core::{
    Catalog, CatalogError, EntryKind, EntryShape, EntryValue, KeyPath, Language, Node,
    ParityIssue, ParityOptions, ParityReport, Registry, RegistryError, Section, Shape, Template,
    UnknownLanguagePolicy, check_parity, lint_catalog,
};

#[cfg(feature = "toml")]
pub use trustlate_toml::{CONFIG_FILE_NAME, TrustlateConfig, TrustlateConfigError};

#[doc(hidden)]
pub use trustlate_core as __core;
