//! Tests for parsing documentation text into a schema.

use std::fmt::Write as _;
use std::io::Write as _;

use ames_docs::{
    DocsError, DocumentSource, DocumentWindow, FileDocument, MetadataParser, TextDocument,
};
use ames_model::{CatalogConfig, Schema, VariableType};

const EXCERPT: &str = "\
Order (Discrete): Observation number

PID (Nominal): Parcel identification number  - can be used with city web site for parcel review.

MS SubClass (Nominal): Identifies the type of dwelling involved in the sale.\t

       020\t1-STORY 1946 & NEWER ALL STYLES
       030\t1-STORY 1945 & OLDER
       040\t1-STORY W/FINISHED ATTIC ALL AGES

MS Zoning (Nominal): Identifies the general zoning classification of the sale.

       A\tAgriculture
       C (all)\tCommercial
       FV\tFloating Village Residential

Lot Frontage (Continuous): Linear feet of street connected to property

Exter Qual (Ordinal): Evaluates the quality of the material on the exterior

       Ex\tExcellent
       Gd\tGood
       TA\tAverage/Typical
       Fa\tFair
       Po\tPoor

Bedroom (Discrete): Bedrooms above grade (does NOT include basement bedrooms)

SalePrice (Continuous): Sale price $$
";

fn render(schema: &Schema) -> String {
    let mut out = String::new();
    for column in schema.columns() {
        writeln!(
            out,
            "{} [{}] {}",
            column.name,
            column.variable_type(),
            column.description
        )
        .unwrap();
        if let Some(lookups) = column.lookups() {
            for realization in lookups.iter() {
                writeln!(out, "  {} => {}", realization.code, realization.description).unwrap();
            }
        }
        if let Some(order) = column.order() {
            writeln!(out, "  order: {}", order.join(", ")).unwrap();
        }
    }
    out
}

fn parse_excerpt() -> Schema {
    let lines = TextDocument::new(EXCERPT).lines().unwrap();
    MetadataParser::default().parse(&lines).unwrap()
}

#[test]
fn test_documentation_excerpt_snapshot() {
    let rendered = render(&parse_excerpt());
    insta::assert_snapshot!("documentation_excerpt", rendered);
}

#[test]
fn test_excerpt_skips_reserved_columns() {
    let schema = parse_excerpt();
    for reserved in CatalogConfig::default().reserved_names() {
        assert!(!schema.contains(reserved), "{reserved} should not be a schema entry");
    }
    assert_eq!(schema.len(), 5);
}

#[test]
fn test_excerpt_types() {
    let schema = parse_excerpt();
    let type_of = |name: &str| schema.get(name).unwrap().variable_type();

    assert_eq!(type_of("MS SubClass"), VariableType::Nominal);
    assert_eq!(type_of("Lot Frontage"), VariableType::Continuous);
    assert_eq!(type_of("Exter Qual"), VariableType::Ordinal);
    assert_eq!(type_of("Bedroom"), VariableType::Discrete);
}

#[test]
fn test_code_with_parentheses_is_a_realization() {
    let schema = parse_excerpt();
    let zoning = schema.get("MS Zoning").unwrap().lookups().unwrap();
    assert_eq!(zoning.get("C (all)"), Some("Commercial"));
    assert!(!schema.contains("C"));
}

#[test]
fn test_ordinal_order_from_excerpt() {
    let schema = parse_excerpt();
    let order = schema.get("Exter Qual").unwrap().order().unwrap();
    assert_eq!(order, ["Ex", "Gd", "TA", "Fa", "Po"]);
}

#[test]
fn test_orphan_realization_reports_line() {
    let lines = ["Lot Area (Continuous): Lot size in square feet", "Ex\tExcellent"];
    let err = MetadataParser::default().parse(lines).unwrap_err();

    assert!(matches!(err, DocsError::OrphanRealization { .. }));
    assert_eq!(err.line_number(), Some(2));
    assert!(err.to_string().contains("Ex\\tExcellent"));
}

#[test]
fn test_unknown_type_reports_tag() {
    let lines = ["Lot Area (Continuous): Lot size", "Foo (Interval): desc"];
    let err = MetadataParser::default().parse(lines).unwrap_err();

    match err {
        DocsError::UnknownType {
            line_number, tag, ..
        } => {
            assert_eq!(line_number, 2);
            assert_eq!(tag, "Interval");
        }
        other => panic!("expected UnknownType, got {other:?}"),
    }
}

#[test]
fn test_repeated_code_keeps_first_position() {
    let lines = [
        "Foo (Ordinal): desc",
        "Ex\tExcellent",
        "Gd\tGood",
        "Ex\tExceptional",
    ];
    let schema = MetadataParser::default().parse(lines).unwrap();
    let foo = schema.get("Foo").unwrap();

    assert_eq!(foo.order().unwrap(), ["Ex", "Gd"]);
    assert_eq!(foo.lookups().unwrap().get("Ex"), Some("Exceptional"));
}

#[test]
fn test_file_document_applies_window() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut text = String::new();
    for i in 0..13 {
        writeln!(text, "header line {i}").unwrap();
    }
    text.push_str("Alley (Nominal): Type of alley access to property\n");
    text.push_str("\n       Grvl\tGravel\n       Pave\tPaved\n");
    file.write_all(text.as_bytes()).unwrap();

    let lines = FileDocument::new(file.path()).lines().unwrap();
    assert_eq!(lines[0], "Alley (Nominal): Type of alley access to property");

    let schema = MetadataParser::default().parse(&lines).unwrap();
    assert_eq!(schema.get("Alley").unwrap().lookups().unwrap().len(), 2);

    let header = FileDocument::new(file.path())
        .with_window(DocumentWindow::full())
        .lines()
        .unwrap();
    assert!(matches!(
        MetadataParser::default().parse(&header),
        Err(DocsError::MalformedLine { line_number: 1, .. })
    ));
}
