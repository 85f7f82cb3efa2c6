use print_layout::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_scale_then_size_fits_reference() {
    let reference = CanvasSize::new(700.0, 500.0);
    let cases = [
        GeoSize::new(70_000.0, 35_000.0),
        GeoSize::new(1_234.5, 98_765.4),
        GeoSize::new(3.0, 3.0),
        GeoSize::new(2_500_000.0, 2_499_999.0),
    ];

    for geo in cases {
        let scale = calc_scale(geo, reference);
        assert!(scale > 0.0);

        let canvas = calc_map_size(scale, geo).unwrap();
        assert!(canvas.width <= reference.width * (1.0 + 1e-12));
        assert!(canvas.height <= reference.height * (1.0 + 1e-12));
        assert!(
            approx_eq(canvas.width, reference.width) || approx_eq(canvas.height, reference.height),
            "neither axis hits the reference for {:?}: {:?}",
            geo,
            canvas
        );
    }
}

#[test]
fn test_example_scenario_canvas() {
    let canvas = calc_map_size(100.0, GeoSize::new(70_000.0, 35_000.0)).unwrap();
    assert_eq!(canvas.inches(), (7.0, 3.5));
    assert_eq!(canvas.area_square_inches(), 24.5);
}

#[test]
fn test_scale_rounding() {
    assert_eq!(Scale::new(1234.4).unwrap().rounded(), 1234);
    assert_eq!(Scale::new(1234.6).unwrap().rounded(), 1235);
    // Ties go to the even neighbour
    assert_eq!(Scale::new(2.5).unwrap().rounded(), 2);
    assert_eq!(Scale::new(3.5).unwrap().rounded(), 4);
}

#[test]
fn test_large_scale_rounding_does_not_clamp() {
    let scale = Scale::new(5.0e9).unwrap();
    assert_eq!(scale.rounded(), 5_000_000_000);
    assert_eq!(scale.to_string(), "1:5000000000");
}

#[test]
fn test_scale_rejects_invalid_values() {
    for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        match Scale::new(value) {
            Err(LayoutError::InvalidScale(_)) => {}
            other => panic!("Expected InvalidScale for {}, got {:?}", value, other),
        }
    }
}

#[test]
fn test_scale_display() {
    assert_eq!(Scale::new(25_000.0).unwrap().to_string(), "1:25000");
}
