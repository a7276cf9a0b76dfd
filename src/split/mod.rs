//! Bill splitting: item allocation, tip resolution and proportional
//! distribution of tax, tip and surcharge.

pub mod allocator;
pub mod distributor;
pub mod tip;

use tracing::{debug, warn};

use crate::errors::ValidationError;
use crate::receipt::Receipt;

pub use allocator::{allocate, split_item, Allocation, Subtotals};
pub use distributor::{distribute, Distribution, PersonBreakdown};
pub use tip::resolve_tip;

/// Default tolerance used when comparing grand and expected totals.
pub const RECONCILIATION_TOLERANCE: f64 = 1e-6;

/// Full result of a split run.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitReport {
    pub restaurant: Option<String>,
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub surcharge: f64,
    pub people: Vec<PersonBreakdown>,
    pub grand_total: f64,
    pub expected_total: f64,
}

impl SplitReport {
    pub fn discrepancy(&self) -> f64 {
        (self.grand_total - self.expected_total).abs()
    }

    pub fn is_reconciled(&self, tolerance: f64) -> bool {
        self.discrepancy() <= tolerance
    }

    pub fn person(&self, name: &str) -> Option<&PersonBreakdown> {
        self.people.iter().find(|person| person.name == name)
    }
}

/// Validates the receipt and runs allocation, tip resolution and distribution.
pub fn split_receipt(receipt: &Receipt) -> Result<SplitReport, ValidationError> {
    receipt.validate()?;

    let Allocation { subtotals, total } = allocate(&receipt.items)?;
    let tip = resolve_tip(&receipt.tip, total);
    debug!(spec = ?receipt.tip, total, tip, "resolved tip");

    let Distribution {
        people,
        grand_total,
        expected_total,
    } = distribute(&subtotals, total, receipt.tax, tip, receipt.surcharge)?;

    let report = SplitReport {
        restaurant: receipt.restaurant.clone(),
        subtotal: total,
        tax: receipt.tax,
        tip,
        surcharge: receipt.surcharge,
        people,
        grand_total,
        expected_total,
    };
    if !report.is_reconciled(RECONCILIATION_TOLERANCE) {
        warn!(
            grand_total = report.grand_total,
            expected_total = report.expected_total,
            "split does not reconcile"
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::{Item, TipSpec};

    #[test]
    fn alice_and_bob_share_a_thirty_dollar_item() {
        let receipt = Receipt::new(vec![Item::new("Platter", 30.0, ["Alice", "Bob"])])
            .with_tax(3.0)
            .with_surcharge(1.0)
            .with_tip(TipSpec::Percent(10.0));
        let report = split_receipt(&receipt).expect("splits");

        assert_eq!(report.subtotal, 30.0);
        assert!((report.tip - 3.0).abs() < 1e-9);
        for name in ["Alice", "Bob"] {
            let person = report.person(name).expect("person present");
            assert_eq!(person.subtotal, 15.0);
            assert!((person.tax_share - 1.5).abs() < 1e-9);
            assert!((person.tip_share - 1.5).abs() < 1e-9);
            assert!((person.surcharge_share - 0.5).abs() < 1e-9);
            assert!((person.total_due - 18.5).abs() < 1e-9);
        }
        assert!((report.grand_total - 37.0).abs() < 1e-9);
        assert!((report.expected_total - 37.0).abs() < 1e-9);
        assert!(report.is_reconciled(RECONCILIATION_TOLERANCE));
    }

    #[test]
    fn empty_receipt_fails_on_zero_subtotal() {
        let err = split_receipt(&Receipt::default()).expect_err("must fail");
        assert_eq!(err, ValidationError::ZeroSubtotal);
    }

    #[test]
    fn free_items_fail_on_zero_subtotal() {
        let receipt = Receipt::new(vec![Item::new("Water", 0.0, ["A"])]);
        assert_eq!(
            split_receipt(&receipt).expect_err("must fail"),
            ValidationError::ZeroSubtotal
        );
    }
}
