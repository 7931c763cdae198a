//! The entry model shared by every catalog.
//!
//! Catalogs are plain Rust structs: literal entries are `&'static str` fields and
//! templates are function-pointer fields whose signature fixes the number and
//! order of their parameters. The [`Section`] and [`Catalog`] traits, usually
//! derived, expose a read-only dynamic view over those structs so that
//! catalogs can be walked, compared and queried by key path.

use crate::error::CatalogError;
use crate::path::KeyPath;
use std::fmt;
use std::sync::Arc;

type RenderFn = dyn Fn(&[&str]) -> String + Send + Sync;

/// A parameterized entry: a pure function of ordered string parameters.
#[derive(Clone)]
pub struct Template {
    parameters: &'static [&'static str],
    render: Arc<RenderFn>,
}

impl Template {
    /// Wraps a render function taking its arguments positionally.
    ///
    /// `render` is only ever called with exactly `parameters.len()` arguments.
    pub fn new<F>(parameters: &'static [&'static str], render: F) -> Self
    where
        F: Fn(&[&str]) -> String + Send + Sync + 'static,
    {
        Self {
            parameters,
            render: Arc::new(render),
        }
    }

    /// Parameter names, in call order.
    pub fn parameters(&self) -> &'static [&'static str] {
        self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Renders the template, rejecting a wrong argument count.
    pub fn render(&self, args: &[&str]) -> Result<String, CatalogError> {
        if args.len() != self.arity() {
            return Err(CatalogError::ArityMismatch {
                expected: self.arity(),
                actual: args.len(),
            });
        }
        Ok((self.render)(args))
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Discriminates the two kinds of entry without their payload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    Literal,
    Template,
}

/// The value of a single translatable unit.
#[derive(Clone, Debug)]
pub enum EntryValue {
    Literal(&'static str),
    Template(Template),
}

impl EntryValue {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Literal(_) => EntryKind::Literal,
            Self::Template(_) => EntryKind::Template,
        }
    }

    pub fn as_literal(&self) -> Option<&'static str> {
        match self {
            Self::Literal(value) => Some(*value),
            Self::Template(_) => None,
        }
    }

    pub fn as_template(&self) -> Option<&Template> {
        match self {
            Self::Literal(_) => None,
            Self::Template(template) => Some(template),
        }
    }

    /// Parameter names; empty for literals.
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            Self::Literal(_) => &[],
            Self::Template(template) => template.parameters(),
        }
    }

    /// Produces the final string. Literals accept no arguments.
    pub fn render(&self, args: &[&str]) -> Result<String, CatalogError> {
        match self {
            Self::Literal(value) if args.is_empty() => Ok((*value).to_string()),
            Self::Literal(_) => Err(CatalogError::ArityMismatch {
                expected: 0,
                actual: args.len(),
            }),
            Self::Template(template) => template.render(args),
        }
    }
}

/// A child of a section: either an entry or a nested section.
pub enum Node<'a> {
    Entry(EntryValue),
    Section(&'a dyn Section),
}

impl<'a> Node<'a> {
    pub fn literal(value: &'static str) -> Self {
        Self::Entry(EntryValue::Literal(value))
    }

    pub fn template<F>(parameters: &'static [&'static str], render: F) -> Self
    where
        F: Fn(&[&str]) -> String + Send + Sync + 'static,
    {
        Self::Entry(EntryValue::Template(Template::new(parameters, render)))
    }

    pub fn section(section: &'a dyn Section) -> Self {
        Self::Section(section)
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry(value) => f.debug_tuple("Entry").field(value).finish(),
            Self::Section(section) => f
                .debug_tuple("Section")
                .field(&section.children().len())
                .finish(),
        }
    }
}

/// A named group of entries, in declaration order.
pub trait Section: Send + Sync + 'static {
    fn children(&self) -> Vec<(&'static str, Node<'_>)>;
}

/// The root of one language's translations.
///
/// Every method has a default implementation walking [`Section::children`].
pub trait Catalog: Section {
    /// All entries, flattened, in declaration order.
    fn entries(&self) -> Vec<(KeyPath, EntryValue)> {
        let mut entries = Vec::new();
        collect_entries(self, &KeyPath::new(), &mut entries);
        entries
    }

    /// Resolves a key path to an entry.
    fn lookup(&self, path: &KeyPath) -> Result<EntryValue, CatalogError> {
        lookup_in(self, path)
    }

    /// The structural signature of this catalog.
    fn shape(&self) -> Shape {
        Shape::from_entries(&self.entries())
    }
}

fn collect_entries<S: Section + ?Sized>(
    section: &S,
    path: &KeyPath,
    acc: &mut Vec<(KeyPath, EntryValue)>,
) {
    for (key, node) in section.children() {
        let path = path.walk(key);
        match node {
            Node::Entry(value) => acc.push((path, value)),
            Node::Section(child) => collect_entries(child, &path, acc),
        }
    }
}

fn lookup_in<S: Section + ?Sized>(root: &S, path: &KeyPath) -> Result<EntryValue, CatalogError> {
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(CatalogError::InvalidKeyPath(path.to_string()));
    };

    let mut children = root.children();
    for segment in parents {
        let node = take_child(children, segment)
            .ok_or_else(|| CatalogError::MissingKey(path.to_string()))?;
        children = match node {
            Node::Section(section) => section.children(),
            Node::Entry(_) => return Err(CatalogError::MissingKey(path.to_string())),
        };
    }

    match take_child(children, last) {
        Some(Node::Entry(value)) => Ok(value),
        Some(Node::Section(_)) => Err(CatalogError::NotAnEntry(path.to_string())),
        None => Err(CatalogError::MissingKey(path.to_string())),
    }
}

fn take_child<'a>(children: Vec<(&'static str, Node<'a>)>, key: &str) -> Option<Node<'a>> {
    children
        .into_iter()
        .find_map(|(child_key, node)| (child_key == key).then_some(node))
}

/// Kind and parameter list of one entry, without its text.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EntryShape {
    pub kind: EntryKind,
    pub parameters: Vec<&'static str>,
}

impl From<&EntryValue> for EntryShape {
    fn from(value: &EntryValue) -> Self {
        Self {
            kind: value.kind(),
            parameters: value.parameters().to_vec(),
        }
    }
}

/// The structural signature of a catalog: every key path with its entry shape.
///
/// Two catalogs with equal shapes expose the same sections, keys and template
/// parameters, whatever their text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Shape {
    entries: indexmap::IndexMap<KeyPath, EntryShape>,
}

impl Shape {
    pub fn from_entries(entries: &[(KeyPath, EntryValue)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(path, value)| (path.clone(), EntryShape::from(value)))
                .collect(),
        }
    }

    pub fn get(&self, path: &KeyPath) -> Option<&EntryShape> {
        self.entries.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &KeyPath> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyPath, &EntryShape)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
