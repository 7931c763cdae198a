use rstest::rstest;
use trustlate::{Catalog, CatalogError, EntryKind, KeyPath, Section};

#[derive(Section)]
pub struct Header {
    pub title: &'static str,
    pub sub_title: &'static str,
}

#[derive(Section)]
#[trustlate(rename_all = "snake_case")]
pub struct Footer {
    pub copyright_notice: fn(year: &str) -> String,
    #[trustlate(key = "Legal")]
    pub legal: &'static str,
}

#[derive(Section)]
pub struct Stats {
    pub range: fn(from: &str, to: &str, total: &str) -> String,
    pub empty: fn() -> String,
}

#[derive(Catalog)]
pub struct Site {
    pub header: Header,
    pub footer: Footer,
    pub stats: Stats,
    pub motto: &'static str,
}

fn copyright(year: &str) -> String {
    format!("(c) {year}")
}

fn range(from: &str, to: &str, total: &str) -> String {
    format!("{from}-{to} of {total}")
}

fn empty() -> String {
    "Nothing here".to_string()
}

static SITE: Site = Site {
    header: Header {
        title: "Welcome",
        sub_title: "to the site",
    },
    footer: Footer {
        copyright_notice: copyright,
        legal: "All rights reserved",
    },
    stats: Stats { range, empty },
    motto: "Ship it",
};

#[test]
fn template_accessors_call_the_function() {
    assert_eq!(SITE.footer.copyright_notice("2024"), "(c) 2024");
    assert_eq!(SITE.stats.range("1", "10", "42"), "1-10 of 42");
    assert_eq!(SITE.stats.empty(), "Nothing here");
}

#[test]
fn keys_follow_rename_rules() {
    let paths: Vec<String> = SITE
        .entries()
        .iter()
        .map(|(path, _)| path.to_string())
        .collect();

    assert_eq!(
        paths,
        [
            "header.title",
            "header.subTitle",
            "footer.copyright_notice",
            "footer.Legal",
            "stats.range",
            "stats.empty",
            "motto",
        ]
    );
}

#[test]
fn sections_expose_their_children() {
    let keys: Vec<&str> = SITE.children().into_iter().map(|(key, _)| key).collect();

    assert_eq!(keys, ["header", "footer", "stats", "motto"]);
}

#[rstest]
#[case("header.subTitle", &[], "to the site")]
#[case("footer.copyright_notice", &["1999"], "(c) 1999")]
#[case("stats.range", &["1", "2", "3"], "1-2 of 3")]
#[case("stats.empty", &[], "Nothing here")]
#[case("motto", &[], "Ship it")]
fn lookup_renders_entries(#[case] path: &str, #[case] args: &[&str], #[case] expected: &str) {
    let entry = SITE.lookup(&path.parse().unwrap()).unwrap();

    assert_eq!(entry.render(args).unwrap(), expected);
}

#[test]
fn templates_report_their_parameters() {
    let entry = SITE.lookup(&"stats.range".parse().unwrap()).unwrap();

    assert_eq!(entry.kind(), EntryKind::Template);
    assert_eq!(entry.parameters(), ["from", "to", "total"]);
    assert_eq!(
        entry.render(&["1"]).unwrap_err(),
        CatalogError::ArityMismatch {
            expected: 3,
            actual: 1
        }
    );
}

#[test]
fn lookup_uses_keys_not_field_names() {
    let path: KeyPath = "header.sub_title".parse().unwrap();

    assert_eq!(
        SITE.lookup(&path).unwrap_err(),
        CatalogError::MissingKey("header.sub_title".to_string())
    );
}

#[test]
fn shape_lists_every_entry() {
    let shape = SITE.shape();

    insta::assert_snapshot!(
        shape
            .iter()
            .map(|(path, entry)| format!("{path}: {} ({})", entry.kind, entry.parameters.join(", ")))
            .collect::<Vec<_>>()
            .join("\n"),
        @r"
    header.title: literal ()
    header.subTitle: literal ()
    footer.copyright_notice: template (year)
    footer.Legal: literal ()
    stats.range: template (from, to, total)
    stats.empty: template ()
    motto: literal ()
    "
    );
}
