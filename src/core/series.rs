use crate::core::binding::{BindingConfig, DataRecord, MapFn};
use crate::core::extract::extract_into;
use crate::core::range::{AxisDomain, RangeState, update_range};
use crate::core::types::{DataPoint, ScreenPoint, ScreenTransform};
use crate::error::SeriesResult;
use crate::interaction::SeriesHit;
use crate::interaction::nearest::{nearest_on_polyline, nearest_snap, nearest_vertex};

/// A line series: the owned point sequence, its range state and the source
/// binding configuration.
///
/// Single-owner semantics: extraction takes `&mut self` and fully rebuilds
/// the sequence, queries take `&self`. Hosts that run extraction and queries
/// on different threads must provide their own exclusion.
#[derive(Debug, Default)]
pub struct LineSeries {
    points: Vec<DataPoint>,
    range: RangeState,
    binding: BindingConfig,
}

impl LineSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn range(&self) -> RangeState {
        self.range
    }

    /// Returns the range bounds to unset, as on a series reset event.
    pub fn reset_range(&mut self) {
        self.range.reset();
    }

    pub fn set_mapping(&mut self, mapping: Option<MapFn>) {
        self.binding.set_mapping(mapping);
    }

    pub fn set_data_fields(&mut self, field_x: Option<String>, field_y: Option<String>) {
        self.binding.set_data_fields(field_x, field_y);
    }

    #[must_use]
    pub fn binding(&self) -> &BindingConfig {
        &self.binding
    }

    /// Rebuilds the point sequence from `source`.
    ///
    /// The sequence is cleared first; an absent source yields an empty
    /// sequence. On error the sequence may be left partially rebuilt.
    pub fn extract_from(&mut self, source: Option<&[Box<dyn DataRecord>]>) -> SeriesResult<()> {
        extract_into(&mut self.points, source, &self.binding)
    }

    /// Refreshes the range state over the current points and notifies both
    /// axes of the final bounds.
    pub fn update_range(&mut self, x_axis: &mut dyn AxisDomain, y_axis: &mut dyn AxisDomain) {
        update_range(&self.points, &mut self.range, x_axis, y_axis);
    }

    /// Nearest stored point to `query` in screen space.
    #[must_use]
    pub fn nearest_vertex(
        &self,
        query: ScreenPoint,
        transform: &dyn ScreenTransform,
    ) -> Option<SeriesHit> {
        nearest_vertex(query, &self.points, transform)
    }

    /// Nearest point anywhere on the polyline connecting the stored points.
    #[must_use]
    pub fn nearest_on_polyline(
        &self,
        query: ScreenPoint,
        transform: &dyn ScreenTransform,
    ) -> Option<SeriesHit> {
        nearest_on_polyline(query, &self.points, transform)
    }

    /// Closer of the vertex and polyline candidates.
    #[must_use]
    pub fn nearest_snap(
        &self,
        query: ScreenPoint,
        transform: &dyn ScreenTransform,
    ) -> Option<SeriesHit> {
        nearest_snap(query, &self.points, transform)
    }
}
