use std::any::TypeId;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::binding::{BindingConfig, DataRecord, RecordShape, SourceBinding};
use crate::core::primitives::to_scalar;
use crate::core::types::DataPoint;
use crate::error::{SeriesError, SeriesResult};

/// Rebuilds `out` from `source` using the strategy the config resolves to.
///
/// The sequence is cleared first; on error it is left partially rebuilt and
/// the caller treats the extraction as atomic-on-success only.
pub(crate) fn extract_into(
    out: &mut Vec<DataPoint>,
    source: Option<&[Box<dyn DataRecord>]>,
    config: &BindingConfig,
) -> SeriesResult<()> {
    out.clear();
    let Some(items) = source else {
        trace!("no source configured, point sequence stays empty");
        return Ok(());
    };

    match config.resolve() {
        SourceBinding::Mapping(mapping) => {
            out.reserve(items.len());
            for item in items {
                out.push(mapping(item.as_ref()));
            }
        }
        SourceBinding::Capability => {
            for item in items {
                if let Some(point) = item.as_point() {
                    out.push(point);
                }
            }
            trace!(
                skipped = items.len() - out.len(),
                "capability pass complete"
            );
        }
        SourceBinding::Fields { x, y } => {
            extract_fields(out, items, x, y)?;
        }
    }

    debug!(count = out.len(), source_len = items.len(), "rebuilt point sequence");
    Ok(())
}

/// Named-field extraction with per-shape accessor caching.
///
/// Field names resolve to indices once per concrete record shape; the pair
/// is re-resolved only when the shape changes between consecutive items, so
/// long same-shape runs in a heterogeneous source pay one lookup.
fn extract_fields(
    out: &mut Vec<DataPoint>,
    items: &[Box<dyn DataRecord>],
    field_x: &str,
    field_y: &str,
) -> SeriesResult<()> {
    let mut cache: IndexMap<TypeId, (usize, usize)> = IndexMap::new();
    let mut last: Option<(RecordShape, (usize, usize))> = None;

    for item in items {
        let shape = item.shape();
        let accessors = match last {
            Some((cached_shape, indices)) if cached_shape == shape => indices,
            _ => {
                let indices = match cache.get(&shape.id) {
                    Some(&indices) => indices,
                    None => {
                        let indices = resolve_accessors(item.as_ref(), shape, field_x, field_y)?;
                        cache.insert(shape.id, indices);
                        indices
                    }
                };
                last = Some((shape, indices));
                indices
            }
        };

        let raw_x = item.field_at(accessors.0).ok_or_else(|| field_not_found(field_x, shape))?;
        let raw_y = item.field_at(accessors.1).ok_or_else(|| field_not_found(field_y, shape))?;
        out.push(DataPoint::new(to_scalar(&raw_x)?, to_scalar(&raw_y)?));
    }

    Ok(())
}

fn resolve_accessors(
    item: &dyn DataRecord,
    shape: RecordShape,
    field_x: &str,
    field_y: &str,
) -> SeriesResult<(usize, usize)> {
    let index_x = item
        .field_index(field_x)
        .ok_or_else(|| field_not_found(field_x, shape))?;
    let index_y = item
        .field_index(field_y)
        .ok_or_else(|| field_not_found(field_y, shape))?;
    trace!(shape = shape.name, field_x, field_y, "resolved field accessors");
    Ok((index_x, index_y))
}

fn field_not_found(field: &str, shape: RecordShape) -> SeriesError {
    SeriesError::FieldNotFound {
        field: field.to_owned(),
        shape: shape.name,
    }
}
