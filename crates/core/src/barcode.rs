use std::collections::HashMap;

use crate::models::ProductRecord;

pub const BARCODE_NOT_FOUND: &str = "❓ Gluten info not found for this product.";

/// Barcode to display-string table, built once at startup and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct ProductTable {
    entries: HashMap<String, String>,
}

impl ProductTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record's display string under its barcode. A repeated
    /// barcode overwrites the earlier entry; the replaced value is returned.
    pub fn insert(&mut self, record: &ProductRecord) -> Option<String> {
        self.entries.insert(record.barcode.clone(), record.display())
    }

    pub fn get(&self, barcode: &str) -> Option<&str> {
        self.entries.get(barcode).map(String::as_str)
    }

    /// Exact-key lookup. Misses return [`BARCODE_NOT_FOUND`].
    pub fn lookup(&self, barcode: &str) -> String {
        lookup_reply(self.get(barcode))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reply text for an optional table hit.
pub fn lookup_reply(found: Option<&str>) -> String {
    found.unwrap_or(BARCODE_NOT_FOUND).to_string()
}

impl<'a> FromIterator<&'a ProductRecord> for ProductTable {
    fn from_iter<I: IntoIterator<Item = &'a ProductRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}
