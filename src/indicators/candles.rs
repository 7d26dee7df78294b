use crate::error::{Error, Result};
use crate::models::CandleSeries;

/// Close of the most recent red candle (close < open).
///
/// Scans the series in chronological order and keeps the close of the last
/// candle that closed below its open. A series with no red candle at all
/// falls back to the first close.
///
/// The open/close arrays arrive as parallel arrays from the chart endpoint;
/// a length mismatch or an empty series is reported as a data-shape error.
pub fn last_red_close(series: &CandleSeries) -> Result<f64> {
    if series.opens.len() != series.closes.len() {
        return Err(Error::CandleMismatch {
            opens: series.opens.len(),
            closes: series.closes.len(),
        });
    }

    if series.closes.is_empty() {
        return Err(Error::EmptyCandles);
    }

    let mut last_red = series.closes[0];

    for (open, close) in series.opens.iter().zip(series.closes.iter()) {
        if close < open {
            last_red = *close;
        }
    }

    Ok(last_red)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(opens: &[f64], closes: &[f64]) -> CandleSeries {
        CandleSeries {
            opens: opens.to_vec(),
            closes: closes.to_vec(),
        }
    }

    #[test]
    fn test_returns_last_red_close() {
        // Red at index 0 and index 2; the later one wins.
        let s = series(&[10.0, 11.0, 13.0], &[9.0, 12.0, 11.0]);
        assert_eq!(last_red_close(&s).unwrap(), 11.0);
    }

    #[test]
    fn test_no_red_candle_falls_back_to_first_close() {
        let s = series(&[10.0, 11.0, 12.0], &[10.5, 11.5, 12.5]);
        assert_eq!(last_red_close(&s).unwrap(), 10.5);
    }

    #[test]
    fn test_flat_candles_count_as_green() {
        // close == open is not red
        let s = series(&[10.0, 11.0], &[10.0, 11.0]);
        assert_eq!(last_red_close(&s).unwrap(), 10.0);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let s = series(&[10.0, 11.0, 12.0], &[9.0, 10.0]);
        let err = last_red_close(&s).unwrap_err();
        assert!(matches!(err, Error::CandleMismatch { opens: 3, closes: 2 }));
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let s = series(&[], &[]);
        assert!(matches!(last_red_close(&s).unwrap_err(), Error::EmptyCandles));
    }
}
