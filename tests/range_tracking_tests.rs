use chartbind::core::range::update_range;
use chartbind::{AxisDomain, DataPoint, DataRecord, LineSeries, RangeState, RecordShape, ScalarValue};

#[derive(Default)]
struct RecordingAxis {
    included: Vec<f64>,
}

impl AxisDomain for RecordingAxis {
    fn include(&mut self, value: f64) {
        self.included.push(value);
    }
}

#[test]
fn range_over_sample_points_matches_componentwise_bounds() {
    let points = vec![
        DataPoint::new(1.0, 5.0),
        DataPoint::new(-3.0, 2.0),
        DataPoint::new(4.0, 9.0),
    ];
    let mut range = RangeState::default();
    let mut x_axis = RecordingAxis::default();
    let mut y_axis = RecordingAxis::default();

    update_range(&points, &mut range, &mut x_axis, &mut y_axis);

    assert!((range.min_x - -3.0).abs() <= 1e-12);
    assert!((range.max_x - 4.0).abs() <= 1e-12);
    assert!((range.min_y - 2.0).abs() <= 1e-12);
    assert!((range.max_y - 9.0).abs() <= 1e-12);

    assert_eq!(x_axis.included, vec![-3.0, 4.0]);
    assert_eq!(y_axis.included, vec![2.0, 9.0]);
}

#[test]
fn empty_sequence_is_a_no_op() {
    let mut range = RangeState::default();
    let mut x_axis = RecordingAxis::default();
    let mut y_axis = RecordingAxis::default();

    update_range(&[], &mut range, &mut x_axis, &mut y_axis);

    assert!(range.is_unset());
    assert!(x_axis.included.is_empty());
    assert!(y_axis.included.is_empty());
}

#[test]
fn unset_bounds_adopt_first_seen_value() {
    let points = vec![DataPoint::new(2.5, -1.5)];
    let mut range = RangeState::default();
    let mut x_axis = RecordingAxis::default();
    let mut y_axis = RecordingAxis::default();

    update_range(&points, &mut range, &mut x_axis, &mut y_axis);

    assert!((range.min_x - 2.5).abs() <= 1e-12);
    assert!((range.max_x - 2.5).abs() <= 1e-12);
    assert!((range.min_y - -1.5).abs() <= 1e-12);
    assert!((range.max_y - -1.5).abs() <= 1e-12);
}

#[test]
fn bounds_widen_but_never_narrow_across_calls() {
    let mut range = RangeState::default();
    let mut x_axis = RecordingAxis::default();
    let mut y_axis = RecordingAxis::default();

    update_range(
        &[DataPoint::new(-10.0, -10.0), DataPoint::new(10.0, 10.0)],
        &mut range,
        &mut x_axis,
        &mut y_axis,
    );
    // A narrower second pass must leave the bounds untouched.
    update_range(
        &[DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)],
        &mut range,
        &mut x_axis,
        &mut y_axis,
    );

    assert!((range.min_x - -10.0).abs() <= 1e-12);
    assert!((range.max_x - 10.0).abs() <= 1e-12);
    assert!((range.min_y - -10.0).abs() <= 1e-12);
    assert!((range.max_y - 10.0).abs() <= 1e-12);
}

struct RawPoint {
    point: DataPoint,
}

impl DataRecord for RawPoint {
    fn shape(&self) -> RecordShape {
        RecordShape::of::<RawPoint>()
    }

    fn as_point(&self) -> Option<DataPoint> {
        Some(self.point)
    }

    fn field_index(&self, _name: &str) -> Option<usize> {
        None
    }

    fn field_at(&self, _index: usize) -> Option<ScalarValue> {
        None
    }
}

#[test]
fn series_update_range_follows_extraction() {
    let mut series = LineSeries::new();
    let source: Vec<Box<dyn DataRecord>> = vec![
        Box::new(RawPoint {
            point: DataPoint::new(1.0, 5.0),
        }),
        Box::new(RawPoint {
            point: DataPoint::new(-3.0, 2.0),
        }),
        Box::new(RawPoint {
            point: DataPoint::new(4.0, 9.0),
        }),
    ];
    series.extract_from(Some(&source)).expect("extract");

    let mut x_axis = RecordingAxis::default();
    let mut y_axis = RecordingAxis::default();
    series.update_range(&mut x_axis, &mut y_axis);

    let range = series.range();
    assert!((range.min_x - -3.0).abs() <= 1e-12);
    assert!((range.max_x - 4.0).abs() <= 1e-12);
    assert!((range.min_y - 2.0).abs() <= 1e-12);
    assert!((range.max_y - 9.0).abs() <= 1e-12);
}

#[test]
fn reset_returns_bounds_to_unset() {
    let mut series = LineSeries::new();
    let source: Vec<Box<dyn DataRecord>> = vec![Box::new(RawPoint {
        point: DataPoint::new(1.0, 1.0),
    })];
    series.extract_from(Some(&source)).expect("extract");

    let mut x_axis = RecordingAxis::default();
    let mut y_axis = RecordingAxis::default();
    series.update_range(&mut x_axis, &mut y_axis);
    assert!(!series.range().is_unset());

    series.reset_range();
    assert!(series.range().is_unset());
}
