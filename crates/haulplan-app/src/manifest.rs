//! Cargo manifest loaders
//!
//! A manifest is the list of cargo items for one planning request,
//! supplied as CSV (one row per item kind) or as a JSON array of items.
//! Upstream extraction tools produce these files; values are validated
//! by the engine, not coerced here.

use std::path::Path;

use thiserror::Error;

use haulplan_types::CargoItem;

/// Expected CSV header columns, in order
const CSV_COLUMNS: [&str; 7] = [
    "id",
    "description",
    "quantity",
    "length_ft",
    "width_ft",
    "height_ft",
    "weight_lbs",
];

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid number in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Unsupported manifest format: {0} (expected .csv or .json)")]
    UnsupportedFormat(String),
}

/// Load a cargo manifest, dispatching on the file extension
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<CargoItem>, ManifestError> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv_manifest(path),
        Some("json") => load_json_manifest(path),
        other => Err(ManifestError::UnsupportedFormat(
            other.unwrap_or("(none)").to_string(),
        )),
    }
}

/// Load a CSV manifest
///
/// Expected header:
/// id,description,quantity,length_ft,width_ft,height_ft,weight_lbs
pub fn load_csv_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<CargoItem>, ManifestError> {
    let content = std::fs::read_to_string(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    validate_headers(&headers)?;

    let mut items = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // header is row 1, first record is row 2
        let row_num = row_idx + 2;
        items.push(parse_record(&headers, &record, row_num)?);
    }

    Ok(items)
}

/// Load a JSON manifest: an array of cargo items in the plan JSON shape
pub fn load_json_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<CargoItem>, ManifestError> {
    let content = std::fs::read_to_string(path)?;
    let items: Vec<CargoItem> = serde_json::from_str(&content)?;
    Ok(items)
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), ManifestError> {
    for required in CSV_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(ManifestError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}

fn parse_record(
    headers: &csv::StringRecord,
    record: &csv::StringRecord,
    row: usize,
) -> Result<CargoItem, ManifestError> {
    let field = |column: &str| -> &str {
        headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| record.get(i))
            .unwrap_or("")
    };
    let number = |column: &str| -> Result<f64, ManifestError> {
        let value = field(column);
        value.parse().map_err(|_| ManifestError::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
    };
    let quantity_str = field("quantity");
    let quantity: u32 = quantity_str
        .parse()
        .map_err(|_| ManifestError::InvalidNumber {
            row,
            column: "quantity".to_string(),
            value: quantity_str.to_string(),
        })?;

    Ok(CargoItem::new(
        field("id"),
        field("description"),
        quantity,
        number("length_ft")?,
        number("width_ft")?,
        number("height_ft")?,
        number("weight_lbs")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE_CSV: &str = "\
id,description,quantity,length_ft,width_ft,height_ft,weight_lbs
exc-1,CAT 320 excavator,1,32.0,10.0,10.5,52000
mat-1,crane mats,8,16.0,4.0,0.8,1200
";

    #[test]
    fn test_load_csv_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cargo.csv");
        std::fs::write(&path, SAMPLE_CSV).unwrap();

        let items = load_manifest(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "exc-1");
        assert_eq!(items[0].quantity, 1);
        assert!((items[1].length - 16.0).abs() < f64::EPSILON);
        assert_eq!(items[1].quantity, 8);
    }

    #[test]
    fn test_missing_column_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cargo.csv");
        std::fs::write(&path, "id,quantity\nx,1\n").unwrap();
        assert!(matches!(
            load_manifest(&path),
            Err(ManifestError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_bad_number_names_row_and_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cargo.csv");
        let csv = "\
id,description,quantity,length_ft,width_ft,height_ft,weight_lbs
a,thing,1,ten,4.0,4.0,1000
";
        std::fs::write(&path, csv).unwrap();
        match load_manifest(&path) {
            Err(ManifestError::InvalidNumber { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "length_ft");
                assert_eq!(value, "ten");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_load_json_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cargo.json");
        let json = r#"[
            {"id": "a", "quantity": 2, "length": 10.0, "width": 4.0, "height": 5.0, "weight": 3000.0}
        ]"#;
        std::fs::write(&path, json).unwrap();
        let items = load_manifest(&path).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].description, "");
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(matches!(
            load_manifest("cargo.xlsx"),
            Err(ManifestError::UnsupportedFormat(_))
        ));
    }
}
