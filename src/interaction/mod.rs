pub mod nearest;

pub use nearest::{DEGENERATE_SEGMENT_LEN2, SeriesHit, nearest_on_polyline, nearest_snap, nearest_vertex};
