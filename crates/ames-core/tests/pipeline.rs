//! End-to-end tests: documentation file and dataset file to a typed frame.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use ames_core::{CatalogError, bootstrap, load_clean_data};
use ames_docs::{DocsError, FileDocument, TextDocument};
use ames_model::{CatalogConfig, Partition, VariableType};
use ames_transform::{CastError, CastOptions};
use polars::prelude::*;
use tempfile::TempDir;

const LISTING: &str = "\
Order (Discrete): Observation number

PID (Nominal): Parcel identification number  - can be used with city web site for parcel review.

MS Zoning (Nominal): Identifies the general zoning classification of the sale.

       A\tAgriculture
       C (all)\tCommercial
       RL\tResidential Low Density

Lot Area (Continuous): Lot size in square feet

Alley (Nominal): Type of alley access to property

       Grvl\tGravel
       Pave\tPaved
       NA \tNo alley access

Overall Qual (Ordinal): Rates the overall material and finish of the house

       10\tVery Excellent
       9\tExcellent
       5\tAverage
       1\tVery Poor

Heating QC (Ordinal): Heating quality and condition

       Ex\tExcellent
       Gd\tGood
       TA\tAverage/Typical

Bedroom (Discrete): Bedrooms above grade (does NOT include basement bedrooms)

Pool QC (Ordinal): Pool quality

       Ex\tExcellent
       NA\tNo Pool

SalePrice (Continuous): Sale price $$
";

const DATASET: &str = "\
Order,PID,MS Zoning,Lot Area,Alley,OverallQual,Heating QC,Bedroom AbvGr,\
 SalePrice,SalePrice_log,years_since_built
1,0526301100,RL,31770,NA,5,Ex,3,215000,12.278,50
2,0526350040,C (all),11622,Grvl,10,TA,2,105000,11.561,49
3,0526351010,RL,14267,NA,1,Gd,,172000,12.055,52
";

struct Fixture {
    _dir: TempDir,
    docs: PathBuf,
    data: PathBuf,
}

fn fixture(dataset: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let mut docs = String::new();
    for i in 0..13 {
        writeln!(docs, "NAME: AmesHousing.txt header line {i}").unwrap();
    }
    docs.push_str(LISTING);
    let docs_path = dir.path().join("data_documentation.txt");
    fs::write(&docs_path, docs).unwrap();

    let data_path = dir.path().join("data_clean.csv");
    fs::write(&data_path, dataset).unwrap();

    Fixture {
        _dir: dir,
        docs: docs_path,
        data: data_path,
    }
}

#[test]
fn bootstrap_builds_indexed_catalog() {
    let fixture = fixture(DATASET);
    let catalog = bootstrap(&FileDocument::new(&fixture.docs), CatalogConfig::default()).unwrap();

    assert_eq!(
        catalog.variables(),
        ["Alley", "Bedroom", "Heating QC", "Lot Area", "MS Zoning", "Overall Qual", "Pool QC"]
    );
    assert_eq!(catalog.numeric().variables(), ["Bedroom", "Lot Area"]);
    assert_eq!(
        catalog.label().variables(),
        ["Alley", "Heating QC", "MS Zoning", "Overall Qual", "Pool QC"]
    );
    assert_eq!(
        catalog.describe("Overall Qual").unwrap().order().unwrap(),
        ["10", "9", "5", "1"]
    );
    assert!(catalog.describe("Alley").unwrap().lookups().unwrap().contains("NA"));
}

#[test]
fn load_clean_data_end_to_end() {
    let fixture = fixture(DATASET);
    let mut catalog =
        bootstrap(&FileDocument::new(&fixture.docs), CatalogConfig::default()).unwrap();
    let label = catalog.view(Partition::Label);

    let typed = load_clean_data(&fixture.data, &mut catalog, &CastOptions::default()).unwrap();
    let df = typed.frame();

    // Names aligned with the dataset header, absent columns dropped.
    assert!(catalog.describe("OverallQual").is_some());
    assert!(catalog.describe("Bedroom AbvGr").is_some());
    assert!(catalog.describe("Pool QC").is_none());
    assert_eq!(
        label.variables(),
        ["Alley", "Heating QC", "MS Zoning", "OverallQual"]
    );

    assert_eq!(df.column("Lot Area").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("Bedroom AbvGr").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("PID").unwrap().dtype(), &DataType::String);

    let pid = df.column("PID").unwrap().str().unwrap();
    assert_eq!(pid.get(0), Some("0526301100"));
    let alley = df.column("Alley").unwrap().str().unwrap();
    assert_eq!(alley.get(0), Some("NA"));
    let bedrooms = df.column("Bedroom AbvGr").unwrap().i64().unwrap();
    assert_eq!(bedrooms.get(2), None);

    assert_eq!(catalog.targets(), ["SalePrice", "SalePrice_log"]);
    assert_eq!(
        catalog.describe("years_since_built").unwrap().variable_type(),
        VariableType::Continuous
    );
}

#[test]
fn ordinal_encoded_load() {
    let fixture = fixture(DATASET);
    let mut catalog =
        bootstrap(&FileDocument::new(&fixture.docs), CatalogConfig::default()).unwrap();

    let options = CastOptions::new().with_ordinal_encoded(true);
    let typed = load_clean_data(&fixture.data, &mut catalog, &options).unwrap();

    // Documented 10, 9, 5, 1 -> ranks 1=0, 5=1, 9=2, 10=3.
    let overall = typed.frame().column("OverallQual").unwrap().i32().unwrap();
    assert_eq!(overall.get(0), Some(1));
    assert_eq!(overall.get(1), Some(3));
    assert_eq!(overall.get(2), Some(0));

    let heating = typed.frame().column("Heating QC").unwrap().i32().unwrap();
    assert_eq!(heating.get(0), Some(2));
    assert_eq!(heating.get(1), Some(0));
}

#[test]
fn cast_failure_names_column_and_value() {
    let dataset = DATASET.replace(",3,215000", ",3.5,215000");
    let fixture = fixture(&dataset);
    let mut catalog =
        bootstrap(&FileDocument::new(&fixture.docs), CatalogConfig::default()).unwrap();

    let err = load_clean_data(&fixture.data, &mut catalog, &CastOptions::default()).unwrap_err();
    match err {
        CatalogError::Cast(CastError::NotInteger { column, value }) => {
            assert_eq!(column, "Bedroom AbvGr");
            assert_eq!(value, "3.5");
        }
        other => panic!("expected NotInteger, got {other:?}"),
    }
}

#[test]
fn parse_failure_surfaces_line_number() {
    let source = TextDocument::new("Lot Area (Continuous): size\nEx\tExcellent\n");
    let err = bootstrap(&source, CatalogConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Docs(DocsError::OrphanRealization { line_number: 2, .. })
    ));
}

#[test]
fn missing_dataset_file() {
    let fixture = fixture(DATASET);
    let mut catalog =
        bootstrap(&FileDocument::new(&fixture.docs), CatalogConfig::default()).unwrap();

    let err = load_clean_data(
        fixture.docs.with_file_name("missing.csv"),
        &mut catalog,
        &CastOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::Ingest(_)));
}
