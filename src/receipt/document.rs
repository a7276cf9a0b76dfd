use serde::{Deserialize, Serialize};

use super::{Item, Receipt, TipSpec};

/// Serialized shape of a receipt as it appears in YAML or JSON input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<String>,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub surcharge: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<TipDocument>,
    #[serde(default)]
    pub items: Vec<ItemDocument>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TipDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl From<TipDocument> for TipSpec {
    fn from(doc: TipDocument) -> Self {
        match (doc.amount, doc.percent) {
            (Some(amount), _) => TipSpec::Amount(amount),
            (None, Some(percent)) => TipSpec::Percent(percent),
            (None, None) => TipSpec::None,
        }
    }
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Self {
            name: doc.name,
            price: doc.price,
            quantity: doc.quantity.unwrap_or(1),
            attendees: doc.attendees,
        }
    }
}

impl From<ReceiptDocument> for Receipt {
    fn from(doc: ReceiptDocument) -> Self {
        Self {
            restaurant: doc.restaurant.filter(|name| !name.trim().is_empty()),
            tax: doc.tax,
            surcharge: doc.surcharge,
            tip: doc.tip.map(TipSpec::from).unwrap_or_default(),
            items: doc.items.into_iter().map(Item::from).collect(),
        }
    }
}
