use id3tree::prelude::*;

use polars::prelude::{DataFrame, NamedFrom, Series};

use std::io::Write;


const TITANIC: &str = "\
PassengerId,Survived,Pclass,Name,Sex,Age
1,0,3,\"Braund, Mr. Owen Harris\",male,22
2,1,1,\"Cumings, Mrs. John Bradley\",female,38
3,1,3,\"Heikkinen, Miss. Laina\",female,26
4,1,1,\"Futrelle, Mrs. Jacques Heath\",female,35
5,0,3,\"Allen, Mr. William Henry\",male,35
6,0,1,\"McCarthy, Mr. Timothy J\",male,54
";


fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}


fn passengers() -> Dataset {
    Dataset::new(vec![
        Column::from_values("Pclass", [3_i64, 1, 3, 1, 3, 1]),
        Column::from_values("Sex", ["male", "female", "female", "female", "male", "male"]),
        Column::from_values("Age", [22_i64, 38, 26, 35, 35, 54]),
        Column::from_values("Survived", [0_i64, 1, 1, 1, 0, 0]),
    ]).unwrap()
}


fn sorted_rows(data: &Dataset) -> Vec<Vec<Value>> {
    let names = data.names();
    let mut rows = (0..data.shape().0)
        .map(|i| {
            names.iter()
                .map(|name| data.column(name).unwrap().values()[i].clone())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    rows.sort();
    rows
}


#[test]
fn new_rejects_ragged_and_duplicate_columns() {
    let ragged = Dataset::new(vec![
        Column::from_values("a", [1_i64, 2]),
        Column::from_values("b", [1_i64]),
    ]);
    assert!(matches!(ragged, Err(Id3Error::RowCountMismatch { .. })));

    let duplicate = Dataset::new(vec![
        Column::from_values("a", [1_i64]),
        Column::from_values("a", [2_i64]),
    ]);
    assert!(matches!(duplicate, Err(Id3Error::DuplicateColumn(name)) if name == "a"));
}


#[test]
fn drop_and_without() {
    let data = passengers();
    assert_eq!(data.shape(), (6, 4));

    let data = data.drop("Sex").unwrap();
    assert_eq!(data.names(), vec!["Pclass", "Age", "Survived"]);
    assert!(data.column("Sex").is_err());
    assert_eq!(data.column("Survived").unwrap().len(), 6);

    assert!(matches!(
        data.clone().drop("Sex"),
        Err(Id3Error::MissingColumn(_))
    ));
    assert_eq!(data.clone().without("Sex"), data);
}


#[test]
fn with_column_appends_or_replaces() {
    let data = passengers();
    let indicator = data.column("Age").unwrap().binarize(35f64).unwrap();
    let data = data.with_column(indicator).unwrap();

    assert_eq!(data.names(), vec!["Pclass", "Sex", "Age", "Survived", "Age<35.0"]);
    assert_eq!(
        data.row(4),
        vec![
            &Value::from(3_i64),
            &Value::from("male"),
            &Value::from(35_i64),
            &Value::from(0_i64),
            &Value::from(1_i64),
        ]
    );

    let short = Column::from_values("Age<35.0", [0_i64]);
    assert!(data.clone().with_column(short).is_err());

    let categories = data.categorize("Age", &[20f64, 40f64]).unwrap();
    assert_eq!(
        categories.column("Age").unwrap().values(),
        &[2_i64, 2, 2, 2, 2, 3].map(Value::Int)[..]
    );
}


#[test]
fn partitions_reconstruct_the_dataset() {
    let data = passengers();
    let selection = AttributeSelector::new("Survived")
        .numeric_attribute("Age")
        .select(&data)
        .unwrap()
        .unwrap();
    assert_eq!(selection.attribute(), "Sex");

    let (data, attribute) = selection.materialize(data).unwrap();
    let mut union = Vec::new();
    for value in data.column(&attribute).unwrap().distinct() {
        let partition = data.filter_eq(&attribute, &value).unwrap();
        assert!(!partition.is_empty());
        union.extend(sorted_rows(&partition));
    }
    union.sort();

    assert_eq!(union, sorted_rows(&data));
}


#[test]
fn partitions_by_median_indicator_reconstruct_the_dataset() {
    let data = Dataset::new(vec![
        Column::from_values("Age", [10_i64, 20, 30, 40, 50]),
        Column::from_values("Survived", [0_i64, 0, 1, 1, 1]),
    ]).unwrap();
    let (data, attribute) = AttributeSelector::new("Survived")
        .numeric_attribute("Age")
        .select(&data)
        .unwrap()
        .unwrap()
        .materialize(data)
        .unwrap();
    assert_eq!(attribute, "Age<30.0");

    let sizes = data.column(&attribute).unwrap()
        .distinct()
        .iter()
        .map(|value| data.filter_eq(&attribute, value).unwrap().shape().0)
        .collect::<Vec<_>>();
    assert_eq!(sizes.iter().sum::<usize>(), 5);
    assert_eq!(sizes, vec![2, 3]);
}


#[test]
fn from_dataframe_keeps_cell_types() {
    let df = DataFrame::new(vec![
        Series::new("Weather", &["Sunny", "Sunny", "Rainy", "Rainy"]),
        Series::new("Temp", &[20.5, 22.0, 15.0, 14.5]),
        Series::new("Survived", &[1_i64, 1, 0, 0]),
    ]).unwrap();

    let data = Dataset::from_dataframe(&df).unwrap();
    assert_eq!(data.shape(), (4, 3));
    assert_eq!(data.names(), vec!["Weather", "Temp", "Survived"]);
    assert_eq!(data.column("Weather").unwrap().values()[2], Value::from("Rainy"));
    assert_eq!(data.column("Temp").unwrap().values()[1], Value::from(22f64));
    assert_eq!(data.column("Survived").unwrap().values()[0], Value::from(1_i64));
}


#[test]
fn from_dataframe_rejects_nulls() {
    let df = DataFrame::new(vec![
        Series::new("Age", &[Some(22_i64), None, Some(30)]),
    ]).unwrap();

    match Dataset::from_dataframe(&df) {
        Err(Id3Error::MissingValue { column, row }) => {
            assert_eq!(column, "Age");
            assert_eq!(row, 1);
        },
        other => panic!("expected a missing value error, got {other:?}"),
    }
}


#[test]
fn reader_drops_identifier_columns() {
    let file = write_csv(TITANIC);
    let data = DatasetReader::default()
        .file(file.path())
        .has_header(true)
        .drop_column("PassengerId")
        .drop_column("Name")
        .read()
        .unwrap();

    assert_eq!(data.shape(), (6, 4));
    assert_eq!(data.names(), vec!["Survived", "Pclass", "Sex", "Age"]);
    assert_eq!(data, passengers_in_file_order());
}


fn passengers_in_file_order() -> Dataset {
    let data = passengers();
    Dataset::new(vec![
        data.column("Survived").unwrap().clone(),
        data.column("Pclass").unwrap().clone(),
        data.column("Sex").unwrap().clone(),
        data.column("Age").unwrap().clone(),
    ]).unwrap()
}


#[test]
fn reader_fails_on_unknown_dropped_column() {
    let file = write_csv(TITANIC);
    let result = DatasetReader::default()
        .file(file.path())
        .drop_column("Cabin")
        .read();
    assert!(matches!(result, Err(Id3Error::MissingColumn(name)) if name == "Cabin"));
}


#[test]
fn reader_fails_on_missing_file() {
    let result = DatasetReader::default()
        .file("/nonexistent/titanic-homework.csv")
        .read();
    assert!(result.is_err());
}


#[test]
fn tree_from_csv() {
    let file = write_csv(TITANIC);
    let data = DatasetReader::default()
        .file(file.path())
        .drop_column("PassengerId")
        .drop_column("Name")
        .read()
        .unwrap();

    let tree = Id3Builder::new("Survived")
        .numeric_attribute("Age")
        .build()
        .build(data)
        .unwrap();

    let expected = "\
Sex
├── female
│   └── 1
└── male
    └── 0
";
    assert_eq!(tree.to_string(), expected);
}
