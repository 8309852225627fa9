use approx::assert_abs_diff_eq;
use better_graphs::ChartError;
use better_graphs::api::{Axis, ChartAxes, LimitOptions, normalize_limits, set_limits};
use better_graphs::core::{AxisDimension, Spine, ViewRange};

fn line_chart_axes() -> ChartAxes {
    ChartAxes::new(ViewRange::new(-4.95, 103.95), ViewRange::new(-1.1, 1.1))
        .with_ticks(AxisDimension::X, vec![0.0, 50.0, 100.0])
        .with_ticks(AxisDimension::Y, vec![-1.0, 0.0, 1.0])
}

#[test]
fn padding_is_proportional_to_largest_tick() {
    let mut axes = line_chart_axes();

    let report = set_limits(&mut axes, 0.1, 0.1, true).expect("normalize");

    let x = axes.view_range(AxisDimension::X);
    assert_abs_diff_eq!(x.min, -10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x.max, 110.0, epsilon = 1e-9);
    let y = axes.view_range(AxisDimension::Y);
    assert_abs_diff_eq!(y.min, -1.1, epsilon = 1e-9);
    assert_abs_diff_eq!(y.max, 1.1, epsilon = 1e-9);

    let x_report = report.get(AxisDimension::X).expect("x normalized");
    assert_eq!((x_report.tick_min, x_report.tick_max), (0.0, 100.0));
    assert_eq!(axes.ticks(AxisDimension::X), vec![0.0, 50.0, 100.0]);
}

#[test]
fn ticks_outside_view_are_discarded() {
    let mut axes = ChartAxes::new(ViewRange::new(0.0, 100.0), ViewRange::new(0.0, 1.0))
        .with_ticks(
            AxisDimension::X,
            vec![-20.0, 0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0],
        )
        .with_ticks(AxisDimension::Y, vec![0.0, 1.0]);

    set_limits(&mut axes, 0.0, 0.0, false).expect("normalize");

    assert_eq!(
        axes.ticks(AxisDimension::X),
        vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
    );
    assert_eq!(axes.view_range(AxisDimension::X), ViewRange::new(0.0, 100.0));
}

#[test]
fn labels_follow_their_surviving_ticks() {
    let mut axes = ChartAxes::new(ViewRange::new(0.0, 120.0), ViewRange::new(0.0, 1.0))
        .with_ticks(AxisDimension::X, vec![0.0, 50.0, 100.0, 150.0]);
    axes.set_tick_labels(
        AxisDimension::X,
        vec!["a".into(), "b".into(), "c".into(), "d".into()],
    );

    normalize_limits(&mut axes, LimitOptions::default().with_keep_labels(true))
        .expect("normalize");

    assert_eq!(axes.tick_labels(AxisDimension::X), vec!["a", "b", "c"]);
}

#[test]
fn surviving_ticks_are_relabelled_with_values_by_default() {
    let mut axes = ChartAxes::new(ViewRange::new(0.0, 120.0), ViewRange::new(0.0, 1.0))
        .with_ticks(AxisDimension::X, vec![0.0, 50.0, 100.0, 150.0]);
    axes.set_tick_labels(
        AxisDimension::X,
        vec!["a".into(), "b".into(), "c".into(), "d".into()],
    );

    normalize_limits(&mut axes, LimitOptions::default()).expect("normalize");

    assert_eq!(axes.tick_labels(AxisDimension::X), vec!["0", "50", "100"]);
}

#[test]
fn trimmed_spines_span_ticks_and_hide_far_side() {
    let mut axes = line_chart_axes();

    set_limits(&mut axes, 0.1, 0.1, true).expect("normalize");

    assert_eq!(axes.spine(Spine::Bottom).bounds, Some((0.0, 100.0)));
    assert_eq!(axes.spine(Spine::Left).bounds, Some((-1.0, 1.0)));
    assert!(axes.spine(Spine::Bottom).visible);
    assert!(axes.spine(Spine::Left).visible);
    assert!(!axes.spine(Spine::Top).visible);
    assert!(!axes.spine(Spine::Right).visible);
}

#[test]
fn spines_untouched_without_trim() {
    let mut axes = line_chart_axes();

    set_limits(&mut axes, 0.1, 0.1, false).expect("normalize");

    for spine in Spine::ALL {
        assert!(axes.spine(spine).visible);
        assert_eq!(axes.spine(spine).bounds, None);
    }
}

#[test]
fn dimension_without_ticks_is_left_alone() {
    let mut axes = ChartAxes::new(ViewRange::new(-5.0, 105.0), ViewRange::new(-3.0, 7.0))
        .with_ticks(AxisDimension::X, vec![0.0, 50.0, 100.0]);

    let report = set_limits(&mut axes, 0.1, 0.1, true).expect("empty y must not fail");

    assert!(report.y.is_none());
    assert_eq!(axes.view_range(AxisDimension::Y), ViewRange::new(-3.0, 7.0));
    assert!(axes.ticks(AxisDimension::Y).is_empty());
    assert_eq!(axes.spine(Spine::Left).bounds, None);
    assert!(axes.spine(Spine::Right).visible);
    assert!(report.x.is_some());
}

#[test]
fn dimension_with_all_ticks_outside_view_is_left_alone() {
    let mut axes = line_chart_axes().with_ticks(AxisDimension::Y, vec![5.0, 10.0]);

    let report = set_limits(&mut axes, 0.1, 0.1, true).expect("normalize");

    assert!(report.y.is_none());
    assert_eq!(axes.ticks(AxisDimension::Y), vec![5.0, 10.0]);
    assert_eq!(axes.view_range(AxisDimension::Y), ViewRange::new(-1.1, 1.1));
}

#[test]
fn normalizing_twice_matches_normalizing_once() {
    let mut axes = line_chart_axes();
    set_limits(&mut axes, 0.1, 0.1, true).expect("first pass");
    let once = axes.clone();

    set_limits(&mut axes, 0.1, 0.1, true).expect("second pass");

    assert_eq!(axes, once);
}

#[test]
fn negative_padding_is_rejected_before_mutation() {
    let mut axes = line_chart_axes();
    let before = axes.clone();

    let err = set_limits(&mut axes, -0.1, 0.1, true).expect_err("negative padding");

    assert!(matches!(err, ChartError::InvalidArgument(_)));
    assert_eq!(axes, before);
}

#[test]
fn non_finite_tick_is_an_invalid_axis() {
    let mut axes = line_chart_axes().with_ticks(AxisDimension::Y, vec![-1.0, f64::NAN]);

    let err = set_limits(&mut axes, 0.1, 0.1, true).expect_err("nan tick");

    assert!(matches!(err, ChartError::InvalidAxis(_)));
    assert_eq!(axes.view_range(AxisDimension::X), ViewRange::new(-4.95, 103.95));
    assert_eq!(axes.spine(Spine::Bottom).bounds, None);
    assert!(axes.spine(Spine::Top).visible);
}

#[test]
fn limit_options_deserialize_with_defaults() {
    let options: LimitOptions = serde_json::from_str(r#"{"x_padding": 0.05}"#).expect("json");
    assert_eq!(options.x_padding, 0.05);
    assert_eq!(options.y_padding, 0.1);
    assert!(options.trim_spines);
    assert!(!options.keep_labels);
}
