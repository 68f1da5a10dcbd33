use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;

pub const REQUIRED_COLUMNS: [&str; 4] = ["Medicine Name", "Uses", "Side_effects", "Manufacturer"];

const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medicine {
    pub name: String,
    pub uses: String,
    pub side_effects: String,
    pub manufacturer: String,
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Medicine Name")]
    name: Option<String>,
    #[serde(rename = "Uses")]
    uses: Option<String>,
    #[serde(rename = "Side_effects")]
    side_effects: Option<String>,
    #[serde(rename = "Manufacturer")]
    manufacturer: Option<String>,
}

impl From<CatalogRow> for Medicine {
    fn from(row: CatalogRow) -> Self {
        Medicine {
            name: row.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            uses: row.uses.unwrap_or_default().to_lowercase(),
            side_effects: row.side_effects.unwrap_or_default(),
            manufacturer: row.manufacturer.unwrap_or_default(),
        }
    }
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Medicine>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(file, path)
}

/// Reads catalog rows from any CSV source; `source` names it in errors.
pub fn parse_catalog<R: Read>(reader: R, source: &Path) -> Result<Vec<Medicine>, LoadError> {
    let malformed = |err: csv::Error| LoadError::Malformed {
        path: source.to_path_buf(),
        source: err,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(malformed)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn {
                path: source.to_path_buf(),
                column,
            });
        }
    }

    let mut medicines = Vec::new();
    for row in reader.deserialize::<CatalogRow>() {
        medicines.push(Medicine::from(row.map_err(malformed)?));
    }

    Ok(medicines)
}
