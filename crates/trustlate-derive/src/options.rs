use darling::{FromDeriveInput, FromField, FromMeta};
use heck::{
    ToKebabCase as _, ToLowerCamelCase as _, ToShoutySnakeCase as _, ToSnakeCase as _,
    ToUpperCamelCase as _,
};
use syn::ext::IdentExt as _;
use syn::spanned::Spanned as _;

/// How field names become catalog keys.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RenameRule {
    #[default]
    CamelCase,
    PascalCase,
    SnakeCase,
    KebabCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::CamelCase => name.to_lower_camel_case(),
            Self::PascalCase => name.to_upper_camel_case(),
            Self::SnakeCase => name.to_snake_case(),
            Self::KebabCase => name.to_kebab_case(),
            Self::ScreamingSnakeCase => name.to_shouty_snake_case(),
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "camelCase" => Ok(Self::CamelCase),
            "PascalCase" => Ok(Self::PascalCase),
            "snake_case" => Ok(Self::SnakeCase),
            "kebab-case" => Ok(Self::KebabCase),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnakeCase),
            other => Err(darling::Error::unknown_value(other)),
        }
    }
}

/// Options for a field of a catalog or section struct.
#[derive(Clone, Debug, FromField)]
#[darling(attributes(trustlate))]
pub struct EntryFieldOpts {
    pub ident: Option<syn::Ident>,
    pub ty: syn::Type,
    pub vis: syn::Visibility,
    /// Explicit key, bypassing `rename_all`.
    #[darling(default)]
    pub key: Option<String>,
}

impl EntryFieldOpts {
    pub fn key(&self, rule: RenameRule) -> String {
        match (&self.key, &self.ident) {
            (Some(key), _) => key.clone(),
            (None, Some(ident)) => rule.apply(&ident.unraw().to_string()),
            (None, None) => String::new(),
        }
    }
}

/// Options for a `Section` or `Catalog` struct.
#[derive(Clone, Debug, FromDeriveInput)]
#[darling(supports(struct_named), attributes(trustlate))]
pub struct SectionOpts {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub data: darling::ast::Data<darling::util::Ignored, EntryFieldOpts>,
    #[darling(default)]
    pub rename_all: Option<RenameRule>,
}

impl SectionOpts {
    pub fn fields(&self) -> Vec<&EntryFieldOpts> {
        match &self.data {
            darling::ast::Data::Struct(fields) => fields.fields.iter().collect(),
            darling::ast::Data::Enum(_) => vec![],
        }
    }

    pub fn rule(&self) -> RenameRule {
        self.rename_all.unwrap_or_default()
    }
}

/// A template parameter taken from the function-pointer signature.
#[derive(Clone, Debug)]
pub struct TemplateParam {
    /// Name reported to the dynamic view.
    pub name: String,
    /// Identifier used in the generated accessor method.
    pub ident: syn::Ident,
}

/// What a field holds, decided from its type.
#[derive(Clone, Debug)]
pub enum FieldKind {
    /// `&'static str`
    Literal,
    /// `fn(a: &str, ..) -> String`
    Template(Vec<TemplateParam>),
    /// Any other named type, expected to implement `Section`.
    Section,
}

pub fn classify(ty: &syn::Type) -> syn::Result<FieldKind> {
    match ty {
        syn::Type::Group(group) => classify(&group.elem),
        syn::Type::Paren(paren) => classify(&paren.elem),
        syn::Type::Reference(reference) => {
            let is_static = reference
                .lifetime
                .as_ref()
                .is_some_and(|lifetime| lifetime.ident == "static");
            if reference.mutability.is_none() && is_static && is_str(&reference.elem) {
                Ok(FieldKind::Literal)
            } else {
                Err(syn::Error::new(
                    ty.span(),
                    "literal entries must have type `&'static str`",
                ))
            }
        },
        syn::Type::BareFn(bare_fn) => classify_template(bare_fn).map(FieldKind::Template),
        syn::Type::Path(path) if path.qself.is_none() => Ok(FieldKind::Section),
        _ => Err(syn::Error::new(
            ty.span(),
            "unsupported entry type: expected `&'static str`, `fn(..: &str) -> String` or a section struct",
        )),
    }
}

fn classify_template(bare_fn: &syn::TypeBareFn) -> syn::Result<Vec<TemplateParam>> {
    if bare_fn.unsafety.is_some() || bare_fn.abi.is_some() || bare_fn.variadic.is_some() {
        return Err(syn::Error::new(
            bare_fn.span(),
            "template entries must be plain safe `fn` pointers",
        ));
    }

    let returns_string = match &bare_fn.output {
        syn::ReturnType::Type(_, ty) => is_path_named(ty, "String"),
        syn::ReturnType::Default => false,
    };
    if !returns_string {
        return Err(syn::Error::new(
            bare_fn.output.span(),
            "template entries must return `String`",
        ));
    }

    let mut params: Vec<TemplateParam> = Vec::with_capacity(bare_fn.inputs.len());
    for (idx, input) in bare_fn.inputs.iter().enumerate() {
        let is_str_ref = matches!(
            &input.ty,
            syn::Type::Reference(reference)
                if reference.mutability.is_none() && is_str(&reference.elem)
        );
        if !is_str_ref {
            return Err(syn::Error::new(
                input.ty.span(),
                "template parameters must have type `&str`",
            ));
        }

        let ident = match &input.name {
            Some((ident, _)) if ident != "_" => ident.clone(),
            _ => quote::format_ident!("arg{}", idx),
        };
        let name = ident.unraw().to_string();

        if params.iter().any(|param| param.name == name) {
            return Err(syn::Error::new(
                ident.span(),
                format!("duplicate template parameter `{name}`"),
            ));
        }
        params.push(TemplateParam { name, ident });
    }

    Ok(params)
}

fn is_str(ty: &syn::Type) -> bool {
    is_path_named(ty, "str")
}

fn is_path_named(ty: &syn::Type, name: &str) -> bool {
    match ty {
        syn::Type::Group(group) => is_path_named(&group.elem, name),
        syn::Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name && segment.arguments.is_none()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    fn param_names(kind: &FieldKind) -> Vec<String> {
        match kind {
            FieldKind::Template(params) => params.iter().map(|p| p.name.clone()).collect(),
            other => panic!("expected a template, got {other:?}"),
        }
    }

    #[test]
    fn static_str_is_a_literal() {
        let ty: syn::Type = parse_quote!(&'static str);
        assert!(matches!(classify(&ty).unwrap(), FieldKind::Literal));
    }

    #[test]
    fn fn_pointer_is_a_template_with_named_parameters() {
        let ty: syn::Type = parse_quote!(fn(name: &str, surname: &str) -> String);
        assert_eq!(param_names(&classify(&ty).unwrap()), ["name", "surname"]);

        let ty: syn::Type = parse_quote!(fn(&str, _: &str, r#type: &str) -> ::std::string::String);
        assert_eq!(param_names(&classify(&ty).unwrap()), ["arg0", "arg1", "type"]);

        let ty: syn::Type = parse_quote!(fn() -> String);
        assert!(param_names(&classify(&ty).unwrap()).is_empty());
    }

    #[test]
    fn named_types_are_sections() {
        let ty: syn::Type = parse_quote!(pages::MainPage);
        assert!(matches!(classify(&ty).unwrap(), FieldKind::Section));
    }

    #[rstest]
    #[case(parse_quote!(&str), "literal entries must have type `&'static str`")]
    #[case(parse_quote!(&'static mut str), "literal entries must have type `&'static str`")]
    #[case(parse_quote!(fn(name: &str)), "template entries must return `String`")]
    #[case(parse_quote!(fn(count: u32) -> String), "template parameters must have type `&str`")]
    #[case(parse_quote!(unsafe fn(name: &str) -> String), "template entries must be plain safe `fn` pointers")]
    #[case(parse_quote!(fn(a: &str, a: &str) -> String), "duplicate template parameter `a`")]
    #[case(parse_quote!((&'static str, &'static str)), "unsupported entry type: expected `&'static str`, `fn(..: &str) -> String` or a section struct")]
    fn rejects_unsupported_types(#[case] ty: syn::Type, #[case] message: &str) {
        assert_eq!(classify(&ty).unwrap_err().to_string(), message);
    }

    #[rstest]
    #[case(RenameRule::CamelCase, "sub_title", "subTitle")]
    #[case(RenameRule::PascalCase, "sub_title", "SubTitle")]
    #[case(RenameRule::SnakeCase, "sub_title", "sub_title")]
    #[case(RenameRule::KebabCase, "sub_title", "sub-title")]
    #[case(RenameRule::ScreamingSnakeCase, "sub_title", "SUB_TITLE")]
    fn rename_rules(#[case] rule: RenameRule, #[case] field: &str, #[case] key: &str) {
        assert_eq!(rule.apply(field), key);
    }

    #[test]
    fn field_keys_honor_overrides() {
        let input: syn::DeriveInput = parse_quote! {
            #[trustlate(rename_all = "snake_case")]
            struct MainPage {
                sub_title: &'static str,
                #[trustlate(key = "heading")]
                title: &'static str,
            }
        };

        let opts = SectionOpts::from_derive_input(&input).unwrap();
        let keys: Vec<String> = opts.fields().iter().map(|f| f.key(opts.rule())).collect();

        assert_eq!(keys, ["sub_title", "heading"]);
    }

    #[test]
    fn unknown_rename_rule_is_rejected() {
        let input: syn::DeriveInput = parse_quote! {
            #[trustlate(rename_all = "Title Case")]
            struct MainPage {
                title: &'static str,
            }
        };

        assert!(SectionOpts::from_derive_input(&input).is_err());
    }
}
