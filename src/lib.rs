//! chartbind: data-binding and hit-testing core for 2-D chart line series.
//!
//! This crate materializes heterogeneous source records into an ordered
//! point sequence, tracks the value range those points span, and answers
//! nearest-point queries (vertex and polyline) used for cursor tracking.
//! Rendering, axis tick generation and coordinate transforms are collaborator
//! contracts consumed through traits, never implemented here.

pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use crate::core::{
    AxisDomain, BindingConfig, DataPoint, DataRecord, LineSeries, MapFn, RangeState, RecordShape,
    ScalarValue, ScreenPoint, ScreenTransform, SourceBinding,
};
pub use crate::error::{SeriesError, SeriesResult};
pub use crate::interaction::SeriesHit;
