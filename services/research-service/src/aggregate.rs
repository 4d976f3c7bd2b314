//! Close-price aggregation over candle batches
//!
//! The single domain computation of the service: a linear pass over an
//! ordered candle sequence producing count, last close, and average close.
//! Plain forward-order f64 summation; rounding follows IEEE-754 double
//! precision with no compensation.

use thiserror::Error;

use crate::models::{Candle, ComputeResponse};

/// Aggregation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// The candle list was empty; there is no last close and the average
    /// would divide by zero.
    #[error("candle list is empty")]
    EmptyCandles,
}

/// Aggregate close prices over an ordered candle sequence.
///
/// `last_close` is the close of the final element in input order, not the
/// maximum-timestamp element; chronological ordering is assumed, never
/// verified. Pure function, no side effects.
pub fn aggregate_closes(candles: &[Candle]) -> Result<ComputeResponse, AggregateError> {
    let last = candles.last().ok_or(AggregateError::EmptyCandles)?;

    let sum: f64 = candles.iter().map(|c| c.close).sum();
    #[allow(clippy::cast_precision_loss)] // Candle counts are far below 2^52
    let average_close = sum / candles.len() as f64;

    Ok(ComputeResponse {
        count: candles.len(),
        last_close: last.close,
        average_close,
    })
}
