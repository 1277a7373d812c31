use crate::domain::grid::GridError;

/// Relative change of `reference_price` against the previous close. A zero
/// previous close is a reported error, never infinity or NaN.
pub fn percent_change(previous_close: f64, reference_price: f64) -> Result<f64, GridError> {
    if previous_close == 0.0 {
        return Err(GridError::DivisionByZero);
    }
    Ok((reference_price - previous_close) / previous_close)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeRatios {
    pub high_pct: f64,
    pub low_pct: f64,
    pub close_pct: f64,
}

pub fn amplitude_ratios(
    previous_close: f64,
    high: f64,
    low: f64,
    close: f64,
) -> Result<AmplitudeRatios, GridError> {
    Ok(AmplitudeRatios {
        high_pct: percent_change(previous_close, high)?,
        low_pct: percent_change(previous_close, low)?,
        close_pct: percent_change(previous_close, close)?,
    })
}
