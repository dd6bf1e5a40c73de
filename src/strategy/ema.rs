/// Exponential moving average, seeded by a simple moving average
use crate::error::{Result, SignalError};

/// Compute a full EMA series over `closes`.
///
/// The first `period` outputs all hold the seed (arithmetic mean of the first
/// `period` closes); from index `period` on the usual recurrence applies with
/// smoothing factor `k = 2 / (period + 1)`. The result is index-aligned 1:1
/// with the input. Fails with `InsufficientData` when there are fewer closes
/// than `period` — a partially seeded series would corrupt every downstream
/// crossover classification, so no partial result is ever returned.
pub fn ema_series(closes: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(SignalError::InvalidParameter(
            "EMA period must be >= 1".to_string(),
        ));
    }

    if closes.len() < period {
        return Err(SignalError::InsufficientData {
            required: period,
            actual: closes.len(),
        });
    }

    let seed = closes[..period].iter().sum::<f64>() / period as f64;
    let mut ema = vec![seed; closes.len()];

    let k = 2.0 / (period as f64 + 1.0);
    for i in period..closes.len() {
        ema[i] = (closes[i] - ema[i - 1]) * k + ema[i - 1];
    }

    Ok(ema)
}

/// Advance an EMA one step from an arbitrary base value.
///
/// Stateless: the caller supplies the base each time, which is what lets the
/// hybrid strategy treat each fine tick as a hypothetical next coarse
/// observation without recomputing history.
pub fn ema_step(base: f64, close: f64, period: usize) -> f64 {
    (close - base) * (2.0 / (period as f64 + 1.0)) + base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_and_recurrence() {
        let closes: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let ema = ema_series(&closes, 3).unwrap();

        assert_eq!(ema.len(), closes.len());
        // Seed = mean(1,2,3) = 2.0 fills indices 0..period
        assert_eq!(&ema[..3], &[2.0, 2.0, 2.0]);
        // k = 2/(3+1) = 0.5
        assert_eq!(ema[3], 3.0); // (4-2.0)*0.5 + 2.0
        assert_eq!(ema[4], 4.0); // (5-3.0)*0.5 + 3.0
    }

    #[test]
    fn test_insufficient_data_gives_no_partial_result() {
        let err = ema_series(&[1.0, 2.0], 3).unwrap_err();
        match err {
            SignalError::InsufficientData { required, actual } => {
                assert_eq!(required, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_exact_length_is_all_seed() {
        let ema = ema_series(&[2.0, 4.0, 6.0], 3).unwrap();
        assert_eq!(ema, vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(
            ema_series(&[1.0], 0),
            Err(SignalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_step_matches_full_series() {
        let closes = vec![3.1, 2.9, 3.4, 3.8, 3.2, 4.1, 4.4, 3.9, 4.6, 4.2];
        let period = 4;
        let ema = ema_series(&closes, period).unwrap();

        for i in period..closes.len() {
            assert_eq!(ema_step(ema[i - 1], closes[i], period), ema[i]);
        }
    }
}
