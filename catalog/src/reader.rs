//! CSV catalog reading.
//!
//! Column lookup is header-driven and case-insensitive. The occasion column
//! is named `Occasion` in some catalog files and `Outdoor` in others, so
//! both are accepted.

use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::record::{ItemFlags, ItemRecord};

/// Resolved column positions for one catalog file.
struct ColumnMap {
    clothes: usize,
    color: usize,
    category: usize,
    occasion: usize,
    size: usize,
    tshirt: Option<usize>,
    pant: Option<usize>,
    hoodie: Option<usize>,
    business: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| -> Option<usize> {
            headers.iter().position(|h| {
                let h = h.trim();
                names.iter().any(|n| h.eq_ignore_ascii_case(n))
            })
        };

        let required = |names: &[&str]| -> Result<usize> {
            find(names).ok_or_else(|| CatalogError::MissingColumn(names[0].to_string()))
        };

        Ok(Self {
            clothes: required(&["Clothes"])?,
            color: required(&["Color"])?,
            category: required(&["Category"])?,
            occasion: required(&["Occasion", "Outdoor"])?,
            size: required(&["Size"])?,
            tshirt: find(&["Tshirt"]),
            pant: find(&["Pant"]),
            hoodie: find(&["Hoodie"]),
            business: find(&["Business"]),
        })
    }
}

/// Parse a flag cell. Truthy markers are `1`, `true`, `yes`, and `x`.
fn parse_flag(record: &StringRecord, index: Option<usize>) -> bool {
    index
        .and_then(|i| record.get(i))
        .map(|v| {
            let v = v.trim();
            v.eq_ignore_ascii_case("1")
                || v.eq_ignore_ascii_case("true")
                || v.eq_ignore_ascii_case("yes")
                || v.eq_ignore_ascii_case("x")
        })
        .unwrap_or(false)
}

/// Read the catalog file into item records.
///
/// Rows are returned in file order. A row missing one of the required
/// cells is an error, not a silent skip.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Vec<ItemRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut items = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let cell = |index: usize, name: &str| -> Result<String> {
            record
                .get(index)
                .map(|v| v.trim().to_string())
                .ok_or_else(|| CatalogError::Row {
                    line,
                    message: format!("missing {name} cell"),
                })
        };

        let item = ItemRecord {
            clothes: cell(columns.clothes, "Clothes")?,
            color: cell(columns.color, "Color")?,
            category: cell(columns.category, "Category")?,
            occasion: cell(columns.occasion, "Occasion")?,
            size: cell(columns.size, "Size")?,
            flags: ItemFlags {
                tshirt: parse_flag(&record, columns.tshirt),
                pant: parse_flag(&record, columns.pant),
                hoodie: parse_flag(&record, columns.hoodie),
                business: parse_flag(&record, columns.business),
            },
        };

        debug!("Loaded item: {}", item.clothes);
        items.push(item);
    }

    info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_read_basic_catalog() {
        let file = write_catalog(
            "Clothes,Color,Category,Occasion,Size\n\
             Blue Jeans,Blue,Bottom,Casual,M\n\
             White Shirt,White,Top,Formal,L\n",
        );

        let items = read_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].clothes, "Blue Jeans");
        assert_eq!(items[1].occasion, "Formal");
        assert!(!items[0].flags.any());
    }

    #[test]
    fn test_outdoor_header_variant() {
        let file = write_catalog(
            "Clothes,Color,Category,Outdoor,Size\n\
             Rain Jacket,Green,Top,Hiking,XL\n",
        );

        let items = read_catalog(file.path()).unwrap();
        assert_eq!(items[0].occasion, "Hiking");
    }

    #[test]
    fn test_case_insensitive_headers() {
        let file = write_catalog(
            "clothes,COLOR,category,occasion,size\n\
             Hoodie,Gray,Top,Casual,S\n",
        );

        let items = read_catalog(file.path()).unwrap();
        assert_eq!(items[0].color, "Gray");
    }

    #[test]
    fn test_flag_columns() {
        let file = write_catalog(
            "Clothes,Color,Category,Occasion,Size,Tshirt,Pant,Hoodie,Business\n\
             Polo,Navy,Top,Work,M,1,0,,yes\n",
        );

        let items = read_catalog(file.path()).unwrap();
        let flags = items[0].flags;
        assert!(flags.tshirt);
        assert!(!flags.pant);
        assert!(!flags.hoodie);
        assert!(flags.business);
    }

    #[test]
    fn test_missing_column() {
        let file = write_catalog("Clothes,Color,Category,Size\nJeans,Blue,Bottom,M\n");

        let err = read_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn(ref c) if c == "Occasion"));
    }

    #[test]
    fn test_description_round_trip() {
        let file = write_catalog(
            "Clothes,Color,Category,Occasion,Size\n\
             Black Dress,Black,Full,Evening,S\n",
        );

        let items = read_catalog(file.path()).unwrap();
        assert_eq!(
            items[0].description(),
            "Item: Black Dress, Color: Black, Category: Full, Occasion: Evening, Size: S"
        );
    }
}
