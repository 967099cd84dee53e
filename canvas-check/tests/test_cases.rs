use canvas_check::cases::{self, line_cap, GREEN};
use canvas_check::{
    assert_pixel, run_case, run_cases, AssertionError, RunConfig, Surface, TestStatus,
};
use canvas_check_canvas2d::{Canvas2dContext, LineCap};
use rstest::rstest;

fn serial() -> RunConfig {
    RunConfig {
        jobs: 1,
        ..Default::default()
    }
}

#[rstest]
#[case("2d.line.cap.butt")]
#[case("2d.line.cap.round")]
#[case("2d.line.cap.square")]
fn test_case_passes(#[case] name: &str) {
    let case = cases::find(name).unwrap();
    let outcome = run_case(&case, &serial());
    assert_eq!(outcome.status, TestStatus::Pass, "{name}");
}

#[test]
fn test_round_cap_scenario_samples() {
    let mut ctx = Canvas2dContext::new(100, 50).unwrap();
    line_cap::draw_round_scene(&mut ctx, LineCap::Round).unwrap();
    let surface = Surface::from_canvas(&ctx);

    let points = [
        (17, 6),
        (25, 6),
        (32, 6),
        (17, 43),
        (25, 43),
        (32, 43),
        (67, 6),
        (75, 6),
        (82, 6),
        (67, 43),
        (75, 43),
        (82, 43),
    ];
    for (x, y) in points {
        assert_pixel(&surface, x, y, 0, 255, 0, 255).unwrap();
    }
}

#[test]
fn test_round_case_fails_with_butt_caps() {
    let mut case = cases::find("2d.line.cap.round").unwrap();
    case.draw = |ctx| line_cap::draw_round_scene(ctx, LineCap::Butt);
    let outcome = run_case(&case, &serial());
    match outcome.status {
        TestStatus::Fail { message } => assert!(message.starts_with("Got pixel"), "{message}"),
        TestStatus::Pass => panic!("butt caps must not pass the round case"),
    }
}

#[test]
fn test_out_of_bounds_on_case_surface() {
    let case = cases::find("2d.line.cap.round").unwrap();
    let mut ctx = Canvas2dContext::new(case.width, case.height).unwrap();
    (case.draw)(&mut ctx).unwrap();
    let surface = Surface::from_canvas(&ctx);

    assert_eq!(
        assert_pixel(&surface, 100, 6, 0, 255, 0, 255),
        Err(AssertionError::OutOfBounds {
            x: 100,
            y: 6,
            width: 100,
            height: 50
        })
    );
    assert!(matches!(
        assert_pixel(&surface, 25, -1, 0, 255, 0, 255),
        Err(AssertionError::OutOfBounds { .. })
    ));
    assert_eq!(surface.get_pixel(0, 0), Some(GREEN));
}

#[test]
fn test_run_all_in_parallel() {
    let config = RunConfig {
        jobs: 4,
        ..Default::default()
    };
    let report = run_cases(&cases::all(), &config);
    assert_eq!(report.passed, 3);
    assert_eq!(report.failed, 0);
    assert!(report.all_passed());
    assert!(report.to_string().ends_with("3 passed, 0 failed"));
}

#[test]
fn test_dump_dir_only_written_for_failures() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        jobs: 1,
        dump_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let passing = cases::find("2d.line.cap.butt").unwrap();
    assert!(run_case(&passing, &config).passed());
    assert!(!dir.path().join("2d.line.cap.butt.png").exists());

    let mut failing = cases::find("2d.line.cap.round").unwrap();
    failing.draw = |ctx| line_cap::draw_round_scene(ctx, LineCap::Square);
    assert!(!run_case(&failing, &config).passed());
    let png = std::fs::read(dir.path().join("2d.line.cap.round.png")).unwrap();
    assert_eq!(&png[1..4], b"PNG");
}
