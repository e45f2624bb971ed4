mod error;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use gluten_core::{ChatRule, ChatRules, ProductRecord, ProductTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use error::LoadError;

/// Read-only tables built once at startup from the two CSV sources.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub products: ProductTable,
    pub chat_rules: ChatRules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceStats {
    pub products_loaded: usize,
    pub chat_rules_loaded: usize,
}

impl ReferenceData {
    /// Loads both sources. A missing or malformed source is logged and
    /// replaced by an empty table; this never fails.
    pub fn load(product_csv: impl AsRef<Path>, chat_csv: impl AsRef<Path>) -> Self {
        Self {
            products: load_products(product_csv.as_ref()),
            chat_rules: load_chat_rules(chat_csv.as_ref()),
        }
    }

    pub fn stats(&self) -> ReferenceStats {
        ReferenceStats {
            products_loaded: self.products.len(),
            chat_rules_loaded: self.chat_rules.len(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(rename = "Barcode")]
    barcode: String,
    #[serde(rename = "Gluten-Free")]
    gluten_free: String,
    #[serde(rename = "Product Name")]
    product_name: String,
}

#[derive(Debug, Deserialize)]
struct ChatRow {
    question: String,
    answer: String,
}

pub fn load_products(path: &Path) -> ProductTable {
    match read_source(path, load_products_from_reader) {
        Ok(table) => {
            info!(path = %path.display(), products = table.len(), "product table loaded");
            table
        }
        Err(error) => {
            warn!(%error, "product table unavailable; barcode lookups will report not found");
            ProductTable::new()
        }
    }
}

pub fn load_chat_rules(path: &Path) -> ChatRules {
    match read_source(path, load_chat_rules_from_reader) {
        Ok(rules) => {
            info!(path = %path.display(), rules = rules.len(), "chat rules loaded");
            rules
        }
        Err(error) => {
            warn!(%error, "chat rules unavailable; chat will answer with the fallback");
            ChatRules::new()
        }
    }
}

pub fn load_products_from_reader<R: Read>(reader: R) -> Result<ProductTable, csv::Error> {
    let mut csv_reader = csv_reader(reader);
    let mut table = ProductTable::new();

    for row in csv_reader.deserialize::<ProductRow>() {
        let row = row?;
        let record = ProductRecord::new(
            row.barcode.trim(),
            is_gluten_free_flag(&row.gluten_free),
            row.product_name,
        );
        if table.insert(&record).is_some() {
            debug!(barcode = %record.barcode, "duplicate barcode overrides earlier row");
        }
    }

    Ok(table)
}

pub fn load_chat_rules_from_reader<R: Read>(reader: R) -> Result<ChatRules, csv::Error> {
    let mut csv_reader = csv_reader(reader);
    let mut rules = ChatRules::new();

    for row in csv_reader.deserialize::<ChatRow>() {
        let row = row?;
        let rule = ChatRule::new(&row.question, &row.answer);
        if rule.trigger.is_empty() {
            debug!(answer = %rule.reply, "chat row with empty question answers every message");
        }
        rules.push(rule);
    }

    Ok(rules)
}

// Rows wider than the header keep their leading fields; short rows still
// fail on the missing column.
fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().flexible(true).from_reader(reader)
}

fn read_source<T>(
    path: &Path,
    parse: fn(File) -> Result<T, csv::Error>,
) -> Result<T, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    parse(file).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn is_gluten_free_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
