//! Receipt model: the immutable input of a split run.

pub mod document;

use crate::errors::ValidationError;

pub use document::{ItemDocument, ReceiptDocument, TipDocument};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Receipt {
    /// Display only; never used in computation.
    pub restaurant: Option<String>,
    pub tax: f64,
    pub surcharge: f64,
    pub tip: TipSpec,
    pub items: Vec<Item>,
}

impl Receipt {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_restaurant(mut self, restaurant: impl Into<String>) -> Self {
        self.restaurant = Some(restaurant.into());
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = tax;
        self
    }

    pub fn with_surcharge(mut self, surcharge: f64) -> Self {
        self.surcharge = surcharge;
        self
    }

    pub fn with_tip(mut self, tip: TipSpec) -> Self {
        self.tip = tip;
        self
    }

    /// Semantic checks that must pass before allocation runs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_amount("tax", self.tax)?;
        check_amount("surcharge", self.surcharge)?;
        match self.tip {
            TipSpec::Amount(amount) => check_amount("tip.amount", amount)?,
            TipSpec::Percent(percent) => check_amount("tip.percent", percent)?,
            TipSpec::None => {}
        }
        for (index, item) in self.items.iter().enumerate() {
            item.validate(index)?;
        }
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount { field, value })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub price: f64,
    /// Zero is treated as one; see [`Item::effective_quantity`].
    pub quantity: u32,
    /// Duplicates are kept: each occurrence is a separate share.
    pub attendees: Vec<String>,
}

impl Item {
    pub fn new<I, S>(name: impl Into<String>, price: f64, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            price,
            quantity: 1,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn effective_quantity(&self) -> u32 {
        if self.quantity > 0 {
            self.quantity
        } else {
            1
        }
    }

    pub fn effective_cost(&self) -> f64 {
        self.price * f64::from(self.effective_quantity())
    }

    /// Name used in diagnostics; unnamed items fall back to a placeholder.
    pub fn label(&self) -> &str {
        if self.name.trim().is_empty() {
            "unnamed"
        } else {
            &self.name
        }
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if self.attendees.is_empty() {
            return Err(ValidationError::NoAttendees {
                index,
                name: self.label().to_string(),
            });
        }
        if !self.price.is_finite() {
            return Err(ValidationError::NonFinitePrice {
                index,
                name: self.label().to_string(),
            });
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice {
                index,
                name: self.label().to_string(),
                price: self.price,
            });
        }
        if !self.effective_cost().is_finite() {
            return Err(ValidationError::NonFiniteCost {
                index,
                name: self.label().to_string(),
            });
        }
        Ok(())
    }
}

/// How the tip is specified on the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TipSpec {
    /// Fixed monetary tip.
    Amount(f64),
    /// Percentage of the item subtotal, e.g. `18.0` for 18%.
    Percent(f64),
    #[default]
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_counts_as_one() {
        let item = Item::new("Fries", 9.0, ["A", "B"]).with_quantity(0);
        assert_eq!(item.effective_quantity(), 1);
        assert_eq!(item.effective_cost(), 9.0);
    }

    #[test]
    fn quantity_multiplies_price() {
        let item = Item::new("Beer", 6.5, ["A"]).with_quantity(4);
        assert_eq!(item.effective_cost(), 26.0);
    }

    #[test]
    fn validate_reports_first_item_without_attendees() {
        let receipt = Receipt::new(vec![
            Item::new("Pizza", 20.0, ["A"]),
            Item::new("Salad", 8.0, Vec::<String>::new()),
        ]);
        let err = receipt.validate().expect_err("empty attendees must fail");
        assert_eq!(
            err,
            ValidationError::NoAttendees {
                index: 1,
                name: "Salad".into()
            }
        );
    }

    #[test]
    fn validate_rejects_negative_tax() {
        let receipt = Receipt::new(vec![Item::new("Pizza", 20.0, ["A"])]).with_tax(-1.0);
        let err = receipt.validate().expect_err("negative tax must fail");
        assert!(matches!(
            err,
            ValidationError::InvalidAmount { field: "tax", .. }
        ));
    }

    #[test]
    fn validate_rejects_negative_price_and_nan_tip() {
        let receipt = Receipt::new(vec![Item::new("", -3.0, ["A"])]);
        let err = receipt.validate().expect_err("negative price must fail");
        assert_eq!(err.to_string(), "item #0 (unnamed) has a negative price: -3");

        let receipt = Receipt::new(vec![Item::new("Pizza", 20.0, ["A"])])
            .with_tip(TipSpec::Percent(f64::NAN));
        assert!(receipt.validate().is_err());
    }

    #[test]
    fn validate_rejects_quantity_overflowing_cost() {
        let receipt = Receipt::new(vec![Item::new("Gold", 1e308, ["A"]).with_quantity(2)]);
        assert_eq!(
            receipt.validate().expect_err("overflowing cost must fail"),
            ValidationError::NonFiniteCost {
                index: 0,
                name: "Gold".into()
            }
        );
    }
}
