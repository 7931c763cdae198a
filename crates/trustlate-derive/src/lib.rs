use proc_macro_error2::proc_macro_error;

mod macros;
mod options;

/// Exposes a struct of translation entries as a catalog section.
///
/// - `&'static str` fields become literal entries.
/// - `fn(name: &str, ..) -> String` fields become templates. The parameter
///   names of the function-pointer type are the template's parameter names,
///   and an accessor method with the same signature is generated.
/// - Fields of any other struct type are nested sections and must implement
///   `Section` themselves.
///
/// # Example
///
/// ```ignore
/// use trustlate::Section;
///
/// #[derive(Section)]
/// pub struct SecondaryPage {
///     pub greeting: fn(name: &str, surname: &str) -> String,
/// }
/// ```
///
/// # Attributes
///
/// - `#[trustlate(rename_all = "snake_case")]` on the struct: how field names
///   become keys. Defaults to `camelCase`.
/// - `#[trustlate(key = "...")]` on a field: explicit key.
#[proc_macro_derive(Section, attributes(trustlate))]
#[proc_macro_error]
pub fn derive_section(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    macros::derive_section::from(input, false)
}

/// Same as [`Section`](derive@Section), and marks the struct as the root of a
/// language's translations.
///
/// ```ignore
/// use trustlate::{Catalog, Section};
///
/// #[derive(Catalog)]
/// pub struct Translations {
///     pub main_page: MainPage,
///     pub secondary_page: SecondaryPage,
/// }
/// ```
#[proc_macro_derive(Catalog, attributes(trustlate))]
#[proc_macro_error]
pub fn derive_catalog(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    macros::derive_section::from(input, true)
}
