//! CLI command implementations.

mod check;
mod common;
mod languages;
mod lookup;

pub use check::{CheckArgs, run_check};
pub use common::ConfigArgs;
pub use languages::{LanguagesArgs, run_languages};
pub use lookup::{LookupArgs, run_lookup, render_entry};
