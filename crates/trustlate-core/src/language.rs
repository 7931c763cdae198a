use std::fmt;
use std::hash::Hash;
use strum::IntoEnumIterator;
use unic_langid::LanguageIdentifier;

/// The closed set of languages an application ships catalogs for.
///
/// Implemented on a field-less enum deriving `strum::EnumIter` and
/// `strum::IntoStaticStr`; the static string of each variant is its language
/// code. The `Default` variant is the base language: the reference for parity
/// checks and the fallback for unknown codes.
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// #[derive(strum::Display, strum::EnumIter, strum::IntoStaticStr)]
/// #[strum(serialize_all = "lowercase")]
/// pub enum Language {
///     En,
///     #[default]
///     Es,
/// }
///
/// impl trustlate::Language for Language {}
/// ```
pub trait Language:
    Copy
    + Default
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + IntoEnumIterator
    + Into<&'static str>
    + Send
    + Sync
    + 'static
{
    /// The language code, e.g. `"es"`.
    fn code(self) -> &'static str {
        self.into()
    }

    /// The parsed identifier for [`code`](Language::code).
    ///
    /// Falls back to the undetermined identifier if the code does not parse.
    fn identifier(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }

    /// Every supported language, in declaration order.
    fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Finds the language whose identifier equals `identifier`.
    ///
    /// Matching is exact after canonicalization: `ES` finds `es`, but `es-ES`
    /// does not.
    fn from_identifier(identifier: &LanguageIdentifier) -> Option<Self> {
        Self::iter().find(|language| &language.identifier() == identifier)
    }
}

/// Comma separated codes of every supported language.
pub(crate) fn available_codes<L: Language>() -> String {
    L::iter().map(L::code).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
pub(crate) mod test_support {
    #[derive(
        Clone,
        Copy,
        Debug,
        Default,
        Eq,
        Hash,
        PartialEq,
        strum::Display,
        strum::EnumIter,
        strum::IntoStaticStr,
    )]
    #[strum(serialize_all = "lowercase")]
    pub enum TestLanguage {
        #[default]
        En,
        Fr,
    }

    impl super::Language for TestLanguage {}
}
