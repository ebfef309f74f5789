use std::any::TypeId;
use std::fmt;

use crate::core::primitives::ScalarValue;
use crate::core::types::DataPoint;

/// Identity of a record's concrete shape, used to key the accessor cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordShape {
    pub id: TypeId,
    pub name: &'static str,
}

impl RecordShape {
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }
}

/// Opaque source item consumed by point extraction.
///
/// Records expose three things: their concrete shape, an optional
/// "produces a point" capability, and name-addressable fields. Field access
/// is split into resolution (`field_index`, per shape) and indexed reads
/// (`field_at`) so resolution can be cached across runs of same-shape items.
pub trait DataRecord {
    fn shape(&self) -> RecordShape;

    /// Capability hook: records that can directly produce a plane point.
    fn as_point(&self) -> Option<DataPoint> {
        None
    }

    /// Resolves a field name to an index on this record's shape.
    fn field_index(&self, name: &str) -> Option<usize>;

    /// Reads the raw value of a previously resolved field.
    fn field_at(&self, index: usize) -> Option<ScalarValue>;
}

/// Per-item mapping function, the highest-priority extraction strategy.
pub type MapFn = Box<dyn Fn(&dyn DataRecord) -> DataPoint>;

/// Source binding configuration owned by a series.
///
/// Read-only during an extraction cycle; resolved into a [`SourceBinding`]
/// at the top of each `extract_from` call.
#[derive(Default)]
pub struct BindingConfig {
    mapping: Option<MapFn>,
    data_field_x: Option<String>,
    data_field_y: Option<String>,
}

impl BindingConfig {
    pub const DEFAULT_FIELD_X: &'static str = "X";
    pub const DEFAULT_FIELD_Y: &'static str = "Y";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mapping(&mut self, mapping: Option<MapFn>) {
        self.mapping = mapping;
    }

    pub fn set_data_fields(&mut self, field_x: Option<String>, field_y: Option<String>) {
        self.data_field_x = field_x;
        self.data_field_y = field_y;
    }

    #[must_use]
    pub fn data_fields(&self) -> (Option<&str>, Option<&str>) {
        (self.data_field_x.as_deref(), self.data_field_y.as_deref())
    }

    /// Selects the active extraction strategy.
    ///
    /// An explicit mapping always wins; with no field names configured the
    /// capability pass runs; otherwise named-field extraction runs with the
    /// defaults `"X"` / `"Y"` filling in an unconfigured side.
    #[must_use]
    pub fn resolve(&self) -> SourceBinding<'_> {
        if let Some(mapping) = &self.mapping {
            return SourceBinding::Mapping(mapping);
        }
        if self.data_field_x.is_none() && self.data_field_y.is_none() {
            return SourceBinding::Capability;
        }
        SourceBinding::Fields {
            x: self.data_field_x.as_deref().unwrap_or(Self::DEFAULT_FIELD_X),
            y: self.data_field_y.as_deref().unwrap_or(Self::DEFAULT_FIELD_Y),
        }
    }
}

impl fmt::Debug for BindingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingConfig")
            .field("mapping", &self.mapping.is_some())
            .field("data_field_x", &self.data_field_x)
            .field("data_field_y", &self.data_field_y)
            .finish()
    }
}

/// Extraction strategy resolved from a [`BindingConfig`], one per call.
pub enum SourceBinding<'a> {
    Mapping(&'a MapFn),
    Capability,
    Fields { x: &'a str, y: &'a str },
}

impl fmt::Debug for SourceBinding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping(_) => f.write_str("Mapping"),
            Self::Capability => f.write_str("Capability"),
            Self::Fields { x, y } => f.debug_struct("Fields").field("x", x).field("y", y).finish(),
        }
    }
}
