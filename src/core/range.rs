use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::DataPoint;

/// Axis collaborator that expands its visible domain to cover a value.
///
/// `include` must be idempotent and order-independent; it may be invoked
/// multiple times per range update.
pub trait AxisDomain {
    fn include(&mut self, value: f64);
}

/// Min/max bounds spanned by a point sequence.
///
/// Bounds start unset (NaN) and are only ever widened; `reset` returns them
/// to unset when the owning series is reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeState {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for RangeState {
    fn default() -> Self {
        Self {
            min_x: f64::NAN,
            max_x: f64::NAN,
            min_y: f64::NAN,
            max_y: f64::NAN,
        }
    }
}

impl RangeState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.min_x.is_nan() && self.max_x.is_nan() && self.min_y.is_nan() && self.max_y.is_nan()
    }
}

/// Widens `range` over every point and pushes the final bounds to both axes.
///
/// No-op on an empty sequence. Unset bounds adopt the first point's
/// coordinates before the widening pass.
pub fn update_range(
    points: &[DataPoint],
    range: &mut RangeState,
    x_axis: &mut dyn AxisDomain,
    y_axis: &mut dyn AxisDomain,
) {
    let Some(first) = points.first() else {
        return;
    };

    if range.min_x.is_nan() {
        range.min_x = first.x;
    }
    if range.max_x.is_nan() {
        range.max_x = first.x;
    }
    if range.min_y.is_nan() {
        range.min_y = first.y;
    }
    if range.max_y.is_nan() {
        range.max_y = first.y;
    }

    for point in points {
        range.min_x = range.min_x.min(point.x);
        range.max_x = range.max_x.max(point.x);
        range.min_y = range.min_y.min(point.y);
        range.max_y = range.max_y.max(point.y);
    }

    x_axis.include(range.min_x);
    x_axis.include(range.max_x);
    y_axis.include(range.min_y);
    y_axis.include(range.max_y);

    trace!(
        min_x = range.min_x,
        max_x = range.max_x,
        min_y = range.min_y,
        max_y = range.max_y,
        "updated series range"
    );
}
