use super::*;

#[test]
fn can_get_log_range_covering_positive_runtimes() {
    let report = TimingReport { reduction_times: vec![0., 0.01, 0.1], naive_times: vec![0.02, 4.] };

    let range = get_log_range(&report);

    assert_eq!(range, 0.005..8.);
}

#[test]
fn can_get_default_log_range_without_positive_runtimes() {
    let range = get_log_range(&TimingReport::default());

    assert_eq!(range, 1E-9..1.);
}

#[test]
fn can_skip_non_positive_points() {
    let points = get_positive_points(&[0., 0.5, -1., 2.]);

    assert_eq!(points, vec![(1, 0.5), (3, 2.)]);
}

#[test]
fn can_use_default_plot_config() {
    let config = PlotConfig::default();

    assert_eq!((config.width, config.height), (800, 600));
}

#[test]
fn can_draw_timing_plot() {
    let out_dir = tempfile::tempdir().unwrap();
    let path = out_dir.path().join("runtimes.png");
    let report = TimingReport { reduction_times: vec![0.001, 0.002, 0.004], naive_times: vec![0.002, 0.016, 0.128] };

    draw_timing_plot(&report, &path, &PlotConfig { width: 320, height: 240 }).unwrap();

    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn can_draw_timing_plot_without_positive_runtimes() {
    let out_dir = tempfile::tempdir().unwrap();
    let path = out_dir.path().join("runtimes.png");
    let report = TimingReport { reduction_times: vec![0., 0.], naive_times: vec![0., 0.] };

    draw_timing_plot(&report, &path, &PlotConfig::default()).unwrap();

    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
