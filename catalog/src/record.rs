//! Catalog item records.

use serde::{Deserialize, Serialize};

/// Optional garment-type flags.
///
/// Some catalog files carry one column per garment type with a truthy
/// marker. Catalogs without these columns load with all flags unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFlags {
    /// Marked as a t-shirt.
    pub tshirt: bool,

    /// Marked as pants.
    pub pant: bool,

    /// Marked as a hoodie.
    pub hoodie: bool,

    /// Marked as business wear.
    pub business: bool,
}

impl ItemFlags {
    /// Whether any flag is set.
    pub fn any(&self) -> bool {
        self.tshirt || self.pant || self.hoodie || self.business
    }

    /// Names of the set flags.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.tshirt {
            labels.push("tshirt");
        }
        if self.pant {
            labels.push("pant");
        }
        if self.hoodie {
            labels.push("hoodie");
        }
        if self.business {
            labels.push("business");
        }
        labels
    }
}

/// A single clothing item, read-only once parsed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Garment name, e.g. "Blue Jeans".
    pub clothes: String,

    /// Color.
    pub color: String,

    /// Category, e.g. "Bottom".
    pub category: String,

    /// Occasion or event type, e.g. "Casual".
    pub occasion: String,

    /// Size label.
    pub size: String,

    /// Optional garment-type flags.
    pub flags: ItemFlags,
}

impl ItemRecord {
    /// Derive the human-readable description used for embedding and in
    /// prompts. The field order and labels are fixed; descriptions are
    /// created once per item and never rewritten.
    pub fn description(&self) -> String {
        format!(
            "Item: {}, Color: {}, Category: {}, Occasion: {}, Size: {}",
            self.clothes, self.color, self.category, self.occasion, self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_description_format() {
        let item = ItemRecord {
            clothes: "Blue Jeans".to_string(),
            color: "Blue".to_string(),
            category: "Bottom".to_string(),
            occasion: "Casual".to_string(),
            size: "M".to_string(),
            flags: ItemFlags::default(),
        };

        assert_eq!(
            item.description(),
            "Item: Blue Jeans, Color: Blue, Category: Bottom, Occasion: Casual, Size: M"
        );
    }

    #[test]
    fn test_flags_labels() {
        let flags = ItemFlags {
            tshirt: true,
            business: true,
            ..Default::default()
        };

        assert!(flags.any());
        assert_eq!(flags.labels(), vec!["tshirt", "business"]);
        assert!(!ItemFlags::default().any());
    }
}
