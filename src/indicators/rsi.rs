use crate::error::{Error, Result};

/// Calculate Relative Strength Index (RSI)
///
/// RSI measures the magnitude of recent price changes to evaluate
/// overbought or oversold conditions.
///
/// Values:
/// - RSI > 70: Overbought
/// - RSI < 30: Oversold
///
/// This is a simple-average RSI over the most recent `length` samples,
/// not Wilder's smoothed variant: the window covers the last `length`
/// closes and each adjacent change is summed into a gain or loss bucket,
/// with both sums divided by `length`.
pub fn calculate_rsi(prices: &[f64], length: usize) -> Result<f64> {
    if length == 0 || prices.len() < length {
        return Err(Error::InsufficientHistory {
            needed: length.max(1),
            got: prices.len(),
        });
    }

    let start = prices.len() - length;

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;

    for i in start..prices.len() - 1 {
        let change = prices[i + 1] - prices[i];
        if change >= 0.0 {
            pos_sum += change;
        } else {
            neg_sum += change.abs();
        }
    }

    let pos_avg = pos_sum / length as f64;
    let neg_avg = neg_sum / length as f64;

    // No losses in the window: RSI saturates at its upper bound.
    if neg_avg == 0.0 {
        return Ok(100.0);
    }

    let rs = pos_avg / neg_avg;
    Ok(100.0 - 100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_known_sequence() {
        // 13 window changes: gains sum to 16, losses to 10, so
        // rs = (16/14) / (10/14) = 1.6 and rsi = 100 - 100/2.6.
        let prices = vec![
            10.0, 11.0, 9.0, 12.0, 13.0, 11.0, 14.0, 15.0, 13.0, 16.0, 17.0, 15.0, 18.0, 19.0,
            17.0,
        ];

        let rsi = calculate_rsi(&prices, 14).unwrap();
        let expected = 100.0 - 100.0 / (1.0 + 1.6);
        assert!((rsi - expected).abs() < 1e-12);
        assert!((rsi - 61.53846153846154).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let prices = vec![100.0, 102.0, 101.0];
        let err = calculate_rsi(&prices, 14).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientHistory { needed: 14, got: 3 }
        ));
    }

    #[test]
    fn test_rsi_zero_length() {
        let prices = vec![100.0, 102.0];
        assert!(calculate_rsi(&prices, 0).is_err());
    }

    #[test]
    fn test_rsi_all_gains_saturates_at_100() {
        let prices = vec![100.0, 101.0, 102.0, 103.0, 104.0, 105.0];
        let rsi = calculate_rsi(&prices, 5).unwrap();
        assert_eq!(rsi, 100.0);
    }

    #[test]
    fn test_rsi_all_losses_saturates_at_0() {
        let prices = vec![105.0, 104.0, 103.0, 102.0, 101.0, 100.0];
        let rsi = calculate_rsi(&prices, 5).unwrap();
        assert_eq!(rsi, 0.0);
    }

    #[test]
    fn test_rsi_window_matches_series_length() {
        // A window exactly as long as the series is the smallest the
        // formula accepts; the first close has no predecessor change.
        let prices = vec![10.0, 12.0, 11.0, 13.0];
        let rsi = calculate_rsi(&prices, 4).unwrap();
        // gains = 2 + 2 = 4, losses = 1; rs = (4/4)/(1/4) = 4
        let expected = 100.0 - 100.0 / (1.0 + 4.0);
        assert!((rsi - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rsi_ignores_samples_before_window() {
        // Samples outside the trailing window must not affect the result.
        let short = vec![10.0, 12.0, 11.0, 13.0];
        let mut long = vec![500.0, 1.0, 250.0];
        long.extend_from_slice(&short);

        let a = calculate_rsi(&short, 4).unwrap();
        let b = calculate_rsi(&long, 4).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_rsi_stays_in_bounds() {
        let prices = vec![44.0, 44.25, 44.5, 43.75, 44.0, 44.5, 45.0, 45.5, 45.25, 45.5];
        let rsi = calculate_rsi(&prices, 9).unwrap();
        assert!(rsi > 0.0 && rsi < 100.0);
    }
}
