use crate::receipt::TipSpec;

/// Monetary tip for a receipt whose items sum to `total`. Unrounded.
pub fn resolve_tip(tip: &TipSpec, total: f64) -> f64 {
    match *tip {
        TipSpec::Amount(amount) => amount,
        TipSpec::Percent(percent) => percent / 100.0 * total,
        TipSpec::None => 0.0,
    }
}
