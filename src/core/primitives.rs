use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{SeriesError, SeriesResult};

/// Raw value produced by a source record before scalar coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Number(f64),
    Integer(i64),
    Decimal(Decimal),
    DateTime(DateTime<Utc>),
    Duration(TimeDelta),
    Text(String),
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for ScalarValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<DateTime<Utc>> for ScalarValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<TimeDelta> for ScalarValue {
    fn from(value: TimeDelta) -> Self {
        Self::Duration(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Converts a raw value to the canonical `f64` scalar used on both axes.
///
/// Date-times use the date axis numeric encoding, durations convert to total
/// elapsed seconds, everything else goes through general numeric coercion.
pub fn to_scalar(value: &ScalarValue) -> SeriesResult<f64> {
    match value {
        ScalarValue::Number(n) => {
            if n.is_finite() {
                Ok(*n)
            } else {
                Err(SeriesError::Coercion(format!("number {n} is not finite")))
            }
        }
        ScalarValue::Integer(i) => Ok(*i as f64),
        ScalarValue::Decimal(d) => decimal_to_f64(*d, "decimal"),
        ScalarValue::DateTime(t) => Ok(datetime_to_unix_seconds(*t)),
        ScalarValue::Duration(d) => Ok(duration_to_seconds(*d)),
        ScalarValue::Text(s) => {
            let parsed: f64 = s
                .trim()
                .parse()
                .map_err(|_| SeriesError::Coercion(format!("'{s}' is not numeric")))?;
            if parsed.is_finite() {
                Ok(parsed)
            } else {
                Err(SeriesError::Coercion(format!("'{s}' is not finite")))
            }
        }
    }
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> SeriesResult<f64> {
    value.to_f64().ok_or_else(|| {
        SeriesError::Coercion(format!("{field_name} cannot be represented as f64"))
    })
}

/// Canonical numeric encoding used by the date axis.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Total elapsed seconds of a duration, millisecond precision.
#[must_use]
pub fn duration_to_seconds(duration: TimeDelta) -> f64 {
    duration.num_milliseconds() as f64 / 1000.0
}
