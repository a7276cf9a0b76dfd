use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::ValidationError;
use crate::receipt::Item;

/// Person name to accumulated item subtotal, ordered by name.
pub type Subtotals = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Allocation {
    pub subtotals: Subtotals,
    /// Literal sum of every item's effective cost.
    pub total: f64,
}

/// Per-attendee share of a single item. The divisor is the attendee list
/// length, so a name listed twice takes two shares.
pub fn split_item(index: usize, item: &Item) -> Result<f64, ValidationError> {
    if item.attendees.is_empty() {
        return Err(ValidationError::NoAttendees {
            index,
            name: item.label().to_string(),
        });
    }
    let cost = item.effective_cost();
    if !cost.is_finite() {
        return Err(ValidationError::NonFiniteCost {
            index,
            name: item.label().to_string(),
        });
    }
    Ok(cost / item.attendees.len() as f64)
}

pub fn allocate(items: &[Item]) -> Result<Allocation, ValidationError> {
    let mut allocation = Allocation::default();
    for (index, item) in items.iter().enumerate() {
        let share = split_item(index, item)?;
        for person in &item.attendees {
            *allocation.subtotals.entry(person.clone()).or_insert(0.0) += share;
        }
        allocation.total += item.effective_cost();
        debug!(
            item = item.label(),
            cost = item.effective_cost(),
            attendees = item.attendees.len(),
            share,
            "allocated item"
        );
    }
    if !allocation.total.is_finite() {
        return Err(ValidationError::NonFiniteTotal { step: "subtotal" });
    }
    Ok(allocation)
}
