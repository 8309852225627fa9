use approx::assert_abs_diff_eq;
use better_graphs::ChartError;
use better_graphs::api::{Axis, BarAnnotationOptions, ChartAxes, annotate_grouped_bars};
use better_graphs::core::{AxisDimension, BarGeometry, Spine, ViewRange, grouped_horizontal_bars};
use better_graphs::render::Color;

fn single_series_axes() -> ChartAxes {
    ChartAxes::new(ViewRange::new(0.0, 7.5), ViewRange::new(-0.5, 2.5))
        .with_ticks(AxisDimension::X, vec![0.0, 2.0, 4.0, 6.0])
        .with_bars(vec![
            BarGeometry::new(0.0, -0.4, 3.0, 0.8),
            BarGeometry::new(0.0, 0.6, 7.0, 0.8),
            BarGeometry::new(0.0, 1.6, 5.0, 0.8),
        ])
}

#[test]
fn edge_and_text_column_scale_with_largest_bar() {
    let mut axes = single_series_axes();

    let layout = annotate_grouped_bars(
        &mut axes,
        &[0.0, 1.0, 2.0],
        BarAnnotationOptions::default().with_spacing_factor(0.1),
    )
    .expect("annotate");

    assert_eq!(layout.max_value, 7.0);
    assert_eq!(layout.gap, 0.0);
    assert_abs_diff_eq!(layout.edge, 8.05, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.text_start, 8.75, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.x_limits.min, -0.7, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.x_limits.max, 9.1, epsilon = 1e-9);
    assert_eq!(axes.view_range(AxisDimension::X), layout.x_limits);
}

#[test]
fn every_bar_gets_connector_and_value() {
    let mut axes = single_series_axes();

    let layout = annotate_grouped_bars(&mut axes, &[0.0, 1.0, 2.0], BarAnnotationOptions::default())
        .expect("annotate");

    let lines = axes.lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].x1, 3.0);
    assert_abs_diff_eq!(lines[0].x2, layout.edge, epsilon = 1e-12);
    assert_abs_diff_eq!(lines[0].y1, 0.0, epsilon = 1e-12);
    assert_eq!(lines[0].y1, lines[0].y2);
    assert_eq!(lines[0].color, Color::BLACK);
    assert_eq!(lines[0].stroke_width, 1.0);

    let texts: Vec<&str> = axes.texts().iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["3", "7", "5"]);
    let first = &axes.texts()[0];
    assert_abs_diff_eq!(first.x, layout.text_start, epsilon = 1e-12);
    assert_abs_diff_eq!(first.y, -0.4, epsilon = 1e-12);
}

#[test]
fn axis_chrome_is_stripped() {
    let mut axes = single_series_axes();

    annotate_grouped_bars(&mut axes, &[0.0, 1.0, 2.0], BarAnnotationOptions::default())
        .expect("annotate");

    assert!(axes.ticks(AxisDimension::X).is_empty());
    assert_eq!(axes.ticks(AxisDimension::Y), vec![0.0, 1.0, 2.0]);
    assert_eq!(axes.tick_mark_length(AxisDimension::Y), 0.0);
    for spine in Spine::ALL {
        assert!(!axes.spine(spine).visible, "{spine:?} still visible");
    }
}

#[test]
fn grouped_bars_center_ticks_and_measure_gap() {
    let index = [0.0, 2.0];
    let bars = grouped_horizontal_bars(
        &index,
        &[vec![1.234, 2.5], vec![3.0, 4.125]],
        0.4,
        0.1,
    )
    .expect("bars");
    let mut axes = ChartAxes::default().with_bars(bars);

    let layout = annotate_grouped_bars(
        &mut axes,
        &index,
        BarAnnotationOptions::default().with_bars_per_group(2),
    )
    .expect("annotate");

    assert_abs_diff_eq!(layout.gap, 0.1, epsilon = 1e-12);
    assert_eq!(layout.tick_positions.len(), 2);
    assert_abs_diff_eq!(layout.tick_positions[0], 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(layout.tick_positions[1], 2.25, epsilon = 1e-12);
    assert_eq!(layout.max_value, 4.125);

    let texts: Vec<&str> = axes.texts().iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["1.23", "2.5", "3", "4.12"]);
    assert_abs_diff_eq!(axes.texts()[2].y, 0.55, epsilon = 1e-12);
}

#[test]
fn rounding_controls_annotation_precision() {
    let mut axes = ChartAxes::default().with_bars(vec![BarGeometry::new(0.0, 0.0, 12.5, 0.8)]);

    annotate_grouped_bars(
        &mut axes,
        &[0.0],
        BarAnnotationOptions::default().with_rounding(0),
    )
    .expect("annotate");

    assert_eq!(axes.texts()[0].text, "12");
}

#[test]
fn category_labels_on_y_are_kept() {
    let mut axes = single_series_axes().with_ticks(AxisDimension::Y, vec![0.0, 1.0, 2.0]);
    axes.set_tick_labels(
        AxisDimension::Y,
        vec!["north".into(), "east".into(), "south".into()],
    );

    annotate_grouped_bars(&mut axes, &[0.0, 1.0, 2.0], BarAnnotationOptions::default())
        .expect("annotate");

    assert_eq!(
        axes.tick_labels(AxisDimension::Y),
        vec!["north", "east", "south"]
    );
}

#[test]
fn axes_without_bars_are_rejected() {
    let mut axes = ChartAxes::default();

    let err = annotate_grouped_bars(&mut axes, &[0.0], BarAnnotationOptions::default())
        .expect_err("no bars");

    assert!(matches!(err, ChartError::InvalidAxis(_)));
}

#[test]
fn invalid_options_fail_before_mutation() {
    let mut axes = single_series_axes();
    let before = axes.clone();

    for options in [
        BarAnnotationOptions::default().with_bars_per_group(0),
        BarAnnotationOptions::default().with_bars_per_group(4),
        BarAnnotationOptions::default().with_spacing_factor(-0.1),
        BarAnnotationOptions::default().with_spacing_factor(f64::NAN),
    ] {
        let err = annotate_grouped_bars(&mut axes, &[0.0, 1.0, 2.0], options)
            .expect_err("invalid options");
        assert!(matches!(err, ChartError::InvalidArgument(_)));
        assert_eq!(axes, before);
    }
}

#[test]
fn non_finite_bar_is_an_invalid_axis() {
    let mut axes =
        ChartAxes::default().with_bars(vec![BarGeometry::new(0.0, 0.0, f64::NAN, 0.8)]);

    let err = annotate_grouped_bars(&mut axes, &[0.0], BarAnnotationOptions::default())
        .expect_err("nan bar");

    assert!(matches!(err, ChartError::InvalidAxis(_)));
}

#[test]
fn huge_bar_values_are_annotated_verbatim() {
    let mut axes = ChartAxes::default().with_bars(vec![
        BarGeometry::new(0.0, -0.4, 1e30, 0.8),
        BarGeometry::new(0.0, 0.6, 5e29, 0.8),
    ]);

    let layout = annotate_grouped_bars(&mut axes, &[0.0, 1.0], BarAnnotationOptions::default())
        .expect("huge but finite bars");

    assert_eq!(layout.max_value, 1e30);
    let texts: Vec<&str> = axes.texts().iter().map(|text| text.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "1000000000000000000000000000000",
            "500000000000000000000000000000"
        ]
    );
}
