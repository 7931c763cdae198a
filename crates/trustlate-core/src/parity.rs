//! Structural parity between the catalogs of different languages.
//!
//! A target catalog is compared against the base language's catalog: it must
//! expose the same key paths, each with the same entry kind and, for
//! templates, the same parameters in the same order. Every catalog is also
//! linted for entries that were never translated and for templates that drop
//! one of their parameters.

use crate::catalog::{Catalog, EntryKind, EntryValue, Shape};
use crate::path::KeyPath;
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

/// Knobs for the content lints.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParityOptions {
    /// Marker left in place of a missing translation, e.g. `[FILLING]`.
    pub filler: Option<String>,
}

impl ParityOptions {
    pub fn with_filler(filler: impl Into<String>) -> Self {
        Self {
            filler: Some(filler.into()),
        }
    }

    fn is_untranslated(&self, text: &str) -> bool {
        text.trim().is_empty()
            || self
                .filler
                .as_deref()
                .is_some_and(|filler| !filler.is_empty() && text.contains(filler))
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParityIssue {
    #[error("'{0}' is missing")]
    MissingEntry(KeyPath),

    #[error("'{0}' does not exist in the base language")]
    UnexpectedEntry(KeyPath),

    #[error("'{path}' is a {actual} but the base language has a {expected}")]
    DifferentEntryKind {
        path: KeyPath,
        expected: EntryKind,
        actual: EntryKind,
    },

    #[error(
        "'{path}' takes ({}) but the base language takes ({})",
        .actual.join(", "),
        .expected.join(", ")
    )]
    DifferentParameters {
        path: KeyPath,
        expected: Vec<&'static str>,
        actual: Vec<&'static str>,
    },

    #[error("'{0}' is not translated")]
    Untranslated(KeyPath),

    #[error("'{path}' never uses parameter '{parameter}'")]
    UnusedParameter {
        path: KeyPath,
        parameter: &'static str,
    },
}

impl ParityIssue {
    pub fn path(&self) -> &KeyPath {
        match self {
            Self::MissingEntry(path)
            | Self::UnexpectedEntry(path)
            | Self::Untranslated(path)
            | Self::DifferentEntryKind { path, .. }
            | Self::DifferentParameters { path, .. }
            | Self::UnusedParameter { path, .. } => path,
        }
    }

    /// Short, table-friendly description of the issue kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingEntry(_) => "Missing values",
            Self::UnexpectedEntry(_) => "Unexpected values",
            Self::DifferentEntryKind { .. } => "Different value",
            Self::DifferentParameters { .. } => "Incompatible parameters",
            Self::Untranslated(_) => "Untranslated",
            Self::UnusedParameter { .. } => "Unused parameter",
        }
    }
}

/// Compares `target` against `base` and lints `target`'s content.
pub fn check_parity<B, T>(base: &B, target: &T, options: &ParityOptions) -> Vec<ParityIssue>
where
    B: Catalog + ?Sized,
    T: Catalog + ?Sized,
{
    let base_shape = base.shape();
    let target_entries = target.entries();
    let target_shape = Shape::from_entries(&target_entries);

    let mut issues = Vec::new();

    for (path, expected) in base_shape.iter() {
        let Some(actual) = target_shape.get(path) else {
            issues.push(ParityIssue::MissingEntry(path.clone()));
            continue;
        };

        if actual.kind != expected.kind {
            issues.push(ParityIssue::DifferentEntryKind {
                path: path.clone(),
                expected: expected.kind,
                actual: actual.kind,
            });
        } else if actual.parameters != expected.parameters {
            issues.push(ParityIssue::DifferentParameters {
                path: path.clone(),
                expected: expected.parameters.clone(),
                actual: actual.parameters.clone(),
            });
        }
    }

    issues.extend(
        target_shape
            .paths()
            .filter(|path| base_shape.get(path).is_none())
            .map(|path| ParityIssue::UnexpectedEntry(path.clone())),
    );

    issues.extend(lint_entries(&target_entries, options));
    issues
}

/// Content lints only, for the base language itself.
pub fn lint_catalog<C: Catalog + ?Sized>(catalog: &C, options: &ParityOptions) -> Vec<ParityIssue> {
    lint_entries(&catalog.entries(), options)
}

fn lint_entries(entries: &[(KeyPath, EntryValue)], options: &ParityOptions) -> Vec<ParityIssue> {
    let mut issues = Vec::new();

    for (path, value) in entries {
        match value {
            EntryValue::Literal(text) => {
                if options.is_untranslated(text) {
                    issues.push(ParityIssue::Untranslated(path.clone()));
                }
            },
            EntryValue::Template(template) => {
                let placeholders: Vec<String> = template
                    .parameters()
                    .iter()
                    .map(|parameter| format!("{{{{{parameter}}}}}"))
                    .collect();
                let args: Vec<&str> = placeholders.iter().map(String::as_str).collect();

                let Ok(rendered) = template.render(&args) else {
                    continue;
                };

                if options.is_untranslated(&rendered) {
                    issues.push(ParityIssue::Untranslated(path.clone()));
                }

                for (parameter, placeholder) in template.parameters().iter().zip(&placeholders) {
                    if !rendered.contains(placeholder.as_str()) {
                        issues.push(ParityIssue::UnusedParameter {
                            path: path.clone(),
                            parameter: *parameter,
                        });
                    }
                }
            },
        }
    }

    issues
}

/// Parity issues grouped by language code, in registration order.
///
/// Languages without issues are recorded too, with an empty list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParityReport {
    languages: IndexMap<&'static str, Vec<ParityIssue>>,
}

impl ParityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: &'static str, issues: Vec<ParityIssue>) {
        self.languages.entry(language).or_default().extend(issues);
    }

    pub fn is_clean(&self) -> bool {
        self.languages.values().all(Vec::is_empty)
    }

    pub fn issue_count(&self) -> usize {
        self.languages.values().map(Vec::len).sum()
    }

    pub fn issues(&self, language: &str) -> &[ParityIssue] {
        self.languages
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[ParityIssue])> {
        self.languages
            .iter()
            .map(|(language, issues)| (*language, issues.as_slice()))
    }
}

impl fmt::Display for ParityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (language, issues) in self.iter() {
            if issues.is_empty() {
                writeln!(f, "{language}: OK")?;
                continue;
            }
            writeln!(f, "{language}: {} issue(s)", issues.len())?;
            for issue in issues {
                writeln!(f, "  - {issue}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Node, Section};

    struct Page {
        title: &'static str,
        greeting: fn(name: &str, surname: &str) -> String,
    }

    impl Section for Page {
        fn children(&self) -> Vec<(&'static str, Node<'_>)> {
            let greeting = self.greeting;
            vec![
                ("title", Node::literal(self.title)),
                (
                    "greeting",
                    Node::template(&["name", "surname"], move |args| {
                        greeting(args[0], args[1])
                    }),
                ),
            ]
        }
    }

    struct Base {
        page: Page,
    }

    impl Section for Base {
        fn children(&self) -> Vec<(&'static str, Node<'_>)> {
            vec![("page", Node::section(&self.page))]
        }
    }

    impl Catalog for Base {}

    /// Same page, but `greeting` became a literal, `title` takes a parameter,
    /// and an extra key was added.
    struct Drifted;

    impl Section for Drifted {
        fn children(&self) -> Vec<(&'static str, Node<'_>)> {
            vec![("page", Node::section(&DriftedPage))]
        }
    }

    impl Catalog for Drifted {}

    struct DriftedPage;

    impl Section for DriftedPage {
        fn children(&self) -> Vec<(&'static str, Node<'_>)> {
            vec![
                (
                    "title",
                    Node::template(&["count"], |args| format!("Titre {}", args[0])),
                ),
                ("greeting", Node::literal("Bonjour")),
                ("footer", Node::literal("Pied")),
            ]
        }
    }

    /// Keeps `greeting` but with parameters swapped.
    struct Reordered;

    impl Section for Reordered {
        fn children(&self) -> Vec<(&'static str, Node<'_>)> {
            vec![("page", Node::section(&ReorderedPage))]
        }
    }

    impl Catalog for Reordered {}

    struct ReorderedPage;

    impl Section for ReorderedPage {
        fn children(&self) -> Vec<(&'static str, Node<'_>)> {
            vec![
                ("title", Node::literal("Titulo")),
                (
                    "greeting",
                    Node::template(&["surname", "name"], |args| {
                        format!("{} {}", args[1], args[0])
                    }),
                ),
            ]
        }
    }

    fn greeting(name: &str, surname: &str) -> String {
        format!("Hello {name} {surname}")
    }

    fn first_name_only(name: &str, _surname: &str) -> String {
        format!("Hi {name}")
    }

    fn base() -> Base {
        Base {
            page: Page {
                title: "Title",
                greeting,
            },
        }
    }

    #[test]
    fn identical_shapes_have_no_issues() {
        let target = Base {
            page: Page {
                title: "Titulo",
                greeting,
            },
        };

        assert!(check_parity(&base(), &target, &ParityOptions::default()).is_empty());
    }

    #[test]
    fn structural_drift_is_reported() {
        let issues = check_parity(&base(), &Drifted, &ParityOptions::default());
        let page = crate::path::KeyPath::new().walk("page");

        assert_eq!(
            issues,
            vec![
                ParityIssue::DifferentEntryKind {
                    path: page.walk("title"),
                    expected: EntryKind::Literal,
                    actual: EntryKind::Template,
                },
                ParityIssue::DifferentEntryKind {
                    path: page.walk("greeting"),
                    expected: EntryKind::Template,
                    actual: EntryKind::Literal,
                },
                ParityIssue::UnexpectedEntry(page.walk("footer")),
            ]
        );
    }

    #[test]
    fn parameter_order_is_part_of_the_shape() {
        let issues = check_parity(&base(), &Reordered, &ParityOptions::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].label(), "Incompatible parameters");
        assert_eq!(
            issues[0].to_string(),
            "'page.greeting' takes (surname, name) but the base language takes (name, surname)"
        );
    }

    #[test]
    fn missing_entries_are_reported_against_the_base() {
        let issues = check_parity(&Drifted, &base(), &ParityOptions::default());

        assert!(issues.contains(&ParityIssue::MissingEntry(
            "page.footer".parse().unwrap()
        )));
    }

    #[test]
    fn lints_flag_filler_and_dropped_parameters() {
        let catalog = Base {
            page: Page {
                title: "[FILLING]",
                greeting: first_name_only,
            },
        };

        let issues = lint_catalog(&catalog, &ParityOptions::with_filler("[FILLING]"));

        assert_eq!(
            issues,
            vec![
                ParityIssue::Untranslated("page.title".parse().unwrap()),
                ParityIssue::UnusedParameter {
                    path: "page.greeting".parse().unwrap(),
                    parameter: "surname",
                },
            ]
        );
    }

    #[test]
    fn blank_literals_are_untranslated_without_a_filler() {
        let catalog = Base {
            page: Page {
                title: "  ",
                greeting,
            },
        };

        assert_eq!(
            lint_catalog(&catalog, &ParityOptions::default()),
            vec![ParityIssue::Untranslated("page.title".parse().unwrap())]
        );
    }

    #[test]
    fn report_groups_issues_per_language() {
        let mut report = ParityReport::new();
        report.insert("en", Vec::new());
        report.insert("fr", check_parity(&base(), &Reordered, &ParityOptions::default()));

        assert!(!report.is_clean());
        assert_eq!(report.issue_count(), 1);
        assert!(report.issues("en").is_empty());
        assert!(report.issues("de").is_empty());

        insta::assert_snapshot!(report.to_string(), @r"
        en: OK
        fr: 1 issue(s)
          - 'page.greeting' takes (surname, name) but the base language takes (name, surname)
        ");
    }
}
