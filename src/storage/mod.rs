pub mod file_source;

use std::fmt;
use std::path::Path;

use crate::{
    errors::{Result, SplitError},
    receipt::{Receipt, ReceiptDocument},
};

pub use file_source::{load_receipt_from_path, FileReceiptSource};

/// Abstraction over anything able to hand over a parsed receipt.
pub trait ReceiptSource {
    fn load(&self) -> Result<Receipt>;
}

/// Structured formats a receipt can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReceiptFormat {
    #[default]
    Yaml,
    Json,
}

impl ReceiptFormat {
    /// Picks the format from the file extension; unknown extensions read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ReceiptFormat::Json,
            _ => ReceiptFormat::Yaml,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReceiptFormat::Yaml => "YAML",
            ReceiptFormat::Json => "JSON",
        }
    }
}

impl fmt::Display for ReceiptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses receipt text. Only structure is checked here; see [`Receipt::validate`].
pub fn parse_receipt(text: &str, format: ReceiptFormat) -> Result<Receipt> {
    let document: ReceiptDocument = match format {
        ReceiptFormat::Yaml => serde_yaml::from_str(text).map_err(|err| malformed(format, err))?,
        ReceiptFormat::Json => serde_json::from_str(text).map_err(|err| malformed(format, err))?,
    };
    Ok(Receipt::from(document))
}

fn malformed(format: ReceiptFormat, err: impl fmt::Display) -> SplitError {
    SplitError::Parse {
        format: format.label(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::TipSpec;
    use std::path::PathBuf;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ReceiptFormat::from_path(&PathBuf::from("dinner.JSON")),
            ReceiptFormat::Json
        );
        assert_eq!(
            ReceiptFormat::from_path(&PathBuf::from("receipt.yml")),
            ReceiptFormat::Yaml
        );
        assert_eq!(
            ReceiptFormat::from_path(&PathBuf::from("receipt")),
            ReceiptFormat::Yaml
        );
    }

    #[test]
    fn parses_yaml_receipt() {
        let text = r#"
restaurant: Luigi's
tax: 3
surcharge: 1
tip:
  percent: 10
items:
  - name: Platter
    price: 30
    quantity: 1
    attendees: [Alice, Bob]
"#;
        let receipt = parse_receipt(text, ReceiptFormat::Yaml).expect("parses");
        assert_eq!(receipt.restaurant.as_deref(), Some("Luigi's"));
        assert_eq!(receipt.tip, TipSpec::Percent(10.0));
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].attendees, ["Alice", "Bob"]);
    }

    #[test]
    fn missing_price_is_malformed() {
        let err = parse_receipt(r#"{"items":[{"attendees":["A"]}]}"#, ReceiptFormat::Json)
            .expect_err("price is required");
        assert!(matches!(err, SplitError::Parse { format: "JSON", .. }));
    }

    #[test]
    fn negative_quantity_is_malformed() {
        let text = "items:\n  - price: 4\n    quantity: -2\n    attendees: [A]\n";
        assert!(matches!(
            parse_receipt(text, ReceiptFormat::Yaml),
            Err(SplitError::Parse { .. })
        ));
    }
}
