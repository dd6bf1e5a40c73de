/// Fast/slow moving-average crossover classification
use crate::types::Signal;

/// Classify the transition of a fast/slow average pair across one step.
///
/// A value exactly equal to its counterpart counts as "not yet crossed" on
/// the prev side; the signal fires only when the current pair breaks the tie
/// strictly in one direction. Equality on both sides yields `None`.
pub fn check_cross(prev_fast: f64, prev_slow: f64, cur_fast: f64, cur_slow: f64) -> Signal {
    if prev_fast <= prev_slow && cur_fast > cur_slow {
        return Signal::Buy;
    }
    if prev_fast >= prev_slow && cur_fast < cur_slow {
        return Signal::Sell;
    }
    Signal::None
}
