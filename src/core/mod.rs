pub mod binding;
pub mod extract;
pub mod primitives;
pub mod range;
pub mod series;
pub mod types;

pub use binding::{BindingConfig, DataRecord, MapFn, RecordShape, SourceBinding};
pub use primitives::ScalarValue;
pub use range::{AxisDomain, RangeState};
pub use series::LineSeries;
pub use types::{DataPoint, ScreenPoint, ScreenTransform};
