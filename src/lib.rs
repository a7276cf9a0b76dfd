#![doc(test(attr(deny(warnings))))]

//! tabsplit turns a receipt description into a per-person bill: shared items
//! are split between their attendees, then tax, tip and surcharge are spread
//! in proportion to each person's subtotal.
//!
//! ```
//! use tabsplit::receipt::{Item, Receipt, TipSpec};
//!
//! let receipt = Receipt::new(vec![Item::new("Platter", 30.0, ["Alice", "Bob"])])
//!     .with_tax(3.0)
//!     .with_tip(TipSpec::Percent(10.0));
//! let report = tabsplit::split::split_receipt(&receipt).unwrap();
//! assert_eq!(report.people.len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod receipt;
pub mod split;
pub mod storage;
pub mod utils;

use std::path::Path;

pub use errors::{Result, SplitError, ValidationError};
pub use receipt::{Item, Receipt, TipSpec};
pub use split::{split_receipt, PersonBreakdown, SplitReport};

/// Loads the receipt at `path` and splits it.
pub fn split_file(path: &Path) -> Result<SplitReport> {
    let receipt = storage::load_receipt_from_path(path)?;
    Ok(split_receipt(&receipt)?)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    #[test]
    fn missing_file_is_unavailable() {
        let err = super::split_file(Path::new("/definitely/not/here.yaml"))
            .expect_err("missing file must fail");
        assert!(matches!(err, super::SplitError::Io { .. }));
    }
}
