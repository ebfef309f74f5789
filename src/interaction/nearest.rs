use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::{DataPoint, ScreenPoint, ScreenTransform};

/// Squared screen-space length below which a segment is treated as a point.
///
/// Endpoints closer than two pixels are visually indistinguishable and the
/// projection division becomes ill-conditioned, so the parameter is forced
/// to the first endpoint instead.
pub const DEGENERATE_SEGMENT_LEN2: f64 = 4.0;

/// Result of a nearest-point query: the data-space point and its screen
/// projection, used to drive crosshair visuals and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesHit {
    pub data: DataPoint,
    pub screen: ScreenPoint,
}

fn squared_distance(a: ScreenPoint, b: ScreenPoint) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Nearest stored point to `query`, compared in screen space.
///
/// Squared distances throughout; ties keep the first point in sequence
/// order. `None` for an empty sequence.
#[must_use]
pub fn nearest_vertex(
    query: ScreenPoint,
    points: &[DataPoint],
    transform: &dyn ScreenTransform,
) -> Option<SeriesHit> {
    nearest_vertex_candidate(query, points, transform).map(|(_, hit)| hit)
}

fn nearest_vertex_candidate(
    query: ScreenPoint,
    points: &[DataPoint],
    transform: &dyn ScreenTransform,
) -> Option<(OrderedFloat<f64>, SeriesHit)> {
    let mut best: Option<(OrderedFloat<f64>, SeriesHit)> = None;
    for &point in points {
        let screen = transform.to_screen(point);
        let dist = OrderedFloat(squared_distance(screen, query));
        match best {
            Some((current, _)) if current <= dist => {}
            _ => {
                best = Some((
                    dist,
                    SeriesHit {
                        data: point,
                        screen,
                    },
                ))
            }
        }
    }
    best
}

/// Nearest point anywhere on the polyline connecting consecutive stored
/// points, compared in screen space.
///
/// The returned data point is interpolated between the segment endpoints at
/// the same parameter as the screen candidate, never re-derived through the
/// inverse transform. `None` for sequences shorter than two points or when
/// no segment admits a candidate.
#[must_use]
pub fn nearest_on_polyline(
    query: ScreenPoint,
    points: &[DataPoint],
    transform: &dyn ScreenTransform,
) -> Option<SeriesHit> {
    nearest_polyline_candidate(query, points, transform).map(|(_, hit)| hit)
}

fn nearest_polyline_candidate(
    query: ScreenPoint,
    points: &[DataPoint],
    transform: &dyn ScreenTransform,
) -> Option<(OrderedFloat<f64>, SeriesHit)> {
    if points.len() < 2 {
        return None;
    }

    let mut best: Option<(OrderedFloat<f64>, SeriesHit)> = None;
    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let sp1 = transform.to_screen(p1);
        let sp2 = transform.to_screen(p2);

        let dx = sp2.x - sp1.x;
        let dy = sp2.y - sp1.y;
        let mut numerator = (query.x - sp1.x) * dx + (query.y - sp1.y) * dy;
        let mut denominator = dx * dx + dy * dy;

        // Near-coincident endpoints: clamp to the first endpoint rather than
        // divide by an ill-conditioned squared length.
        if denominator < DEGENERATE_SEGMENT_LEN2 {
            numerator = 0.0;
            denominator = 1.0;
        }
        if denominator == 0.0 {
            continue;
        }

        let u = numerator / denominator;
        if !(0.0..=1.0).contains(&u) {
            continue;
        }

        let candidate = ScreenPoint::new(sp1.x + u * dx, sp1.y + u * dy);
        let dist = OrderedFloat(squared_distance(candidate, query));
        match best {
            Some((current, _)) if current <= dist => {}
            _ => {
                best = Some((
                    dist,
                    SeriesHit {
                        data: DataPoint::new(p1.x + u * (p2.x - p1.x), p1.y + u * (p2.y - p1.y)),
                        screen: candidate,
                    },
                ))
            }
        }
    }
    best
}

/// Closer of the vertex and polyline candidates; the vertex wins ties.
#[must_use]
pub fn nearest_snap(
    query: ScreenPoint,
    points: &[DataPoint],
    transform: &dyn ScreenTransform,
) -> Option<SeriesHit> {
    let mut candidates: SmallVec<[(OrderedFloat<f64>, SeriesHit); 2]> = SmallVec::new();
    if let Some(candidate) = nearest_vertex_candidate(query, points, transform) {
        candidates.push(candidate);
    }
    if let Some(candidate) = nearest_polyline_candidate(query, points, transform) {
        candidates.push(candidate);
    }

    candidates
        .into_iter()
        .min_by_key(|item| item.0)
        .map(|(_, hit)| hit)
}
