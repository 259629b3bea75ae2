use super::*;
use chrono::NaiveDate;
use serde_json::json;

fn midnight(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn it_classifies_every_known_literal() {
    let known = [
        ("text", PropertyType::Text),
        ("rich_text", PropertyType::RichText),
        ("select", PropertyType::Select),
        ("title", PropertyType::Title),
        ("date", PropertyType::Date),
        ("checkbox", PropertyType::Checkbox),
        ("number", PropertyType::Number),
        ("url", PropertyType::Url),
        ("unknown", PropertyType::Unknown),
    ];

    for (wire_type, expected) in known {
        assert_eq!(PropertyType::classify(wire_type), expected);
        assert!(PropertyType::is_known(wire_type));
        assert_eq!(expected.as_str(), wire_type);
        assert_eq!(expected.to_string(), wire_type);
    }
}

#[test]
fn it_classifies_anything_else_as_unknown() {
    for wire_type in ["unknown_type", "multi_select", "", "Checkbox", "rich text", "🦀"] {
        assert_eq!(PropertyType::classify(wire_type), PropertyType::Unknown);
        assert!(!PropertyType::is_known(wire_type));
    }
}

#[test]
fn it_only_reports_encoders_for_writable_types() {
    assert!(PropertyType::Checkbox.has_encoder());
    assert!(PropertyType::Title.has_encoder());
    assert!(!PropertyType::Url.has_encoder());
    assert!(!PropertyType::Unknown.has_encoder());
}

#[test]
fn it_looks_up_schema_types_by_name() {
    let schema: DatabaseSchema = [
        PropertyDefinition::new("property1", PropertyType::Checkbox),
        PropertyDefinition::new("property2", PropertyType::Text),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        schema.property_type("property2"),
        Some(PropertyType::Text)
    );
    assert_eq!(schema.property_type("missing"), None);
    assert_eq!(schema.column_names(), vec!["property1", "property2"]);
}

#[test]
fn it_converts_raw_json_losslessly() {
    assert_eq!(CellValue::from(json!(null)), CellValue::Empty);
    assert_eq!(CellValue::from(json!(true)), CellValue::Bool(true));
    assert_eq!(CellValue::from(json!(45)), CellValue::from(45));
    assert_eq!(CellValue::from(json!("a")), CellValue::from("a"));
    assert_eq!(
        CellValue::from(json!({"somefield": "somevalue"})),
        CellValue::Json(json!({"somefield": "somevalue"}))
    );
}

#[test]
fn it_maps_non_finite_floats_to_empty() {
    assert_eq!(CellValue::from(f64::NAN), CellValue::Empty);
    assert_eq!(CellValue::from(2.5).as_f64(), Some(2.5));
    assert_eq!(CellValue::from(None::<bool>), CellValue::Empty);
}

#[test]
fn it_parses_supported_date_formats() {
    assert_eq!(parse_date("2022/3/4"), Some(midnight(2022, 3, 4)));
    assert_eq!(parse_date("2022-03-04"), Some(midnight(2022, 3, 4)));
    assert_eq!(
        parse_date("2022-03-04T10:30:00"),
        NaiveDate::from_ymd_opt(2022, 3, 4).unwrap().and_hms_opt(10, 30, 0)
    );
    assert_eq!(
        parse_date("2022-03-04T10:30:00.000+02:00"),
        NaiveDate::from_ymd_opt(2022, 3, 4).unwrap().and_hms_opt(10, 30, 0)
    );
    assert_eq!(parse_date("next tuesday"), None);
}

#[test]
fn it_replaces_cells_on_insert() {
    let mut row = Row::new(None);
    row.insert("a", CellValue::from(1));
    row.insert("b", CellValue::from(2));
    row.insert("a", CellValue::from(3));

    assert_eq!(row.len(), 2);
    assert_eq!(row.get("a"), Some(&CellValue::from(3)));
    assert_eq!(row.columns().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn it_unions_columns_in_first_appearance_order() {
    let mut first = Row::new(Some("page-1".to_string()));
    first.insert("name", CellValue::from("first"));
    let mut second = Row::new(None);
    second.insert("done", CellValue::from(true));
    second.insert("name", CellValue::from("second"));

    let table = Table::from_rows(vec![first, second]);

    assert_eq!(table.columns(), ["name", "done"]);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.column("done").collect::<Vec<_>>(),
        vec![None, Some(&CellValue::Bool(true))]
    );
    assert_eq!(
        table.row("page-1").and_then(|row| row.get("name")),
        Some(&CellValue::from("first"))
    );
    assert!(table.row("missing").is_none());
}

#[test]
fn it_keeps_columns_of_empty_tables() {
    let table = Table::empty(vec!["a".to_string(), "b".to_string()]);

    assert!(table.is_empty());
    assert_eq!(table.columns(), ["a", "b"]);
}

#[test]
fn it_builds_rows_from_unique_cells() {
    let row = Row::with_cells(
        Some("page-1".to_string()),
        vec![
            ("b".to_string(), CellValue::from(1)),
            ("a".to_string(), CellValue::Empty),
        ],
    );

    assert_eq!(row.id(), Some("page-1"));
    assert_eq!(row.columns().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(row.get("a"), Some(&CellValue::Empty));
}

#[test]
fn it_dedups_columns_across_wide_tables() {
    let rows = (0..200)
        .map(|position| {
            let cells = (0..50)
                .map(|column| {
                    let column = (position + column) % 120;
                    (format!("column_{column}"), CellValue::from(column as i64))
                })
                .collect();
            Row::with_cells(Some(format!("page-{position}")), cells)
        })
        .collect();

    let table = Table::from_rows(rows);

    let expected = (0..120).map(|column| format!("column_{column}")).collect::<Vec<_>>();
    assert_eq!(table.columns(), expected);
    assert_eq!(table.len(), 200);
    assert_eq!(
        table.row("page-3").and_then(|row| row.get("column_52")),
        Some(&CellValue::from(52))
    );
}
