use serde::Serialize;
use tracing::debug;

use super::allocator::Subtotals;
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonBreakdown {
    pub name: String,
    pub subtotal: f64,
    pub tax_share: f64,
    pub tip_share: f64,
    pub surcharge_share: f64,
    pub total_due: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    /// Sorted by person name.
    pub people: Vec<PersonBreakdown>,
    /// Sum of every `total_due` in `people`.
    pub grand_total: f64,
    /// `total + tax + tip + surcharge`, independent of the per-person values.
    pub expected_total: f64,
}

/// Spreads tax, tip and surcharge over people in proportion to their subtotal.
pub fn distribute(
    subtotals: &Subtotals,
    total: f64,
    tax: f64,
    tip: f64,
    surcharge: f64,
) -> Result<Distribution, ValidationError> {
    if !total.is_finite() {
        return Err(ValidationError::NonFiniteTotal { step: "subtotal" });
    }
    if total == 0.0 {
        return Err(ValidationError::ZeroSubtotal);
    }
    let expected_total = total + tax + tip + surcharge;
    if !expected_total.is_finite() {
        return Err(ValidationError::NonFiniteTotal {
            step: "expected total",
        });
    }

    let mut distribution = Distribution {
        people: Vec::with_capacity(subtotals.len()),
        grand_total: 0.0,
        expected_total,
    };

    for (name, &subtotal) in subtotals {
        let ratio = subtotal / total;
        let tax_share = ratio * tax;
        let tip_share = ratio * tip;
        let surcharge_share = ratio * surcharge;
        let total_due = subtotal + tax_share + tip_share + surcharge_share;
        distribution.grand_total += total_due;
        distribution.people.push(PersonBreakdown {
            name: name.clone(),
            subtotal,
            tax_share,
            tip_share,
            surcharge_share,
            total_due,
        });
    }
    if !distribution.grand_total.is_finite() {
        return Err(ValidationError::NonFiniteTotal {
            step: "grand total",
        });
    }

    debug!(
        people = distribution.people.len(),
        grand_total = distribution.grand_total,
        expected_total = distribution.expected_total,
        "distributed charges"
    );
    Ok(distribution)
}
