#[cfg(test)]
mod _tests_polygon {
    use super::super::point::Point2d;
    use super::super::polygon::{Dimension, Orientation, Polygon, Rectangle};

    const TOL: f64 = 1e-10;

    fn unit_square_ccw() -> Polygon {
        Polygon::new(&[
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_from_two_axis_aligned_points_is_1d() {
        let horizontal =
            Polygon::new(&[Point2d::new(-125.0, 0.0), Point2d::new(125.0, 0.0)]).unwrap();
        assert_eq!(horizontal.axis(), Dimension::X1d);
        assert_eq!(horizontal.len(), 1);

        let vertical = Polygon::new(&[Point2d::new(0.0, -50.0), Point2d::new(0.0, 50.0)]).unwrap();
        assert_eq!(vertical.axis(), Dimension::Y1d);
    }

    #[test]
    fn test_polygon_from_two_skew_points_fails() {
        let result = Polygon::new(&[Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_polygon_from_single_point_fails() {
        assert!(Polygon::new(&[Point2d::new(0.0, 0.0)]).is_err());
    }

    #[test]
    fn test_polygon_closes_loop() {
        let p = unit_square_ccw();
        assert_eq!(p.len(), 4);
        for i in 0..p.len() {
            let next = (i + 1) % p.len();
            assert_eq!(p.edges()[i].dst, p.edges()[next].org);
        }
    }

    #[test]
    fn test_signed_area_ccw_positive() {
        let p = unit_square_ccw();
        assert!((p.signed_area() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_set_bypass_directions() {
        let mut p = unit_square_ccw();

        p.set_bypass(Orientation::Cw);
        assert!(p.signed_area() <= 0.0);

        p.set_bypass(Orientation::Ccw);
        assert!(p.signed_area() >= 0.0);

        // Requesting the current orientation changes nothing.
        assert!(!p.set_bypass(Orientation::Ccw));
    }

    #[test]
    fn test_set_bypass_keeps_chain_closed() {
        let mut p = unit_square_ccw();
        p.set_bypass(Orientation::Cw);
        for i in 0..p.len() {
            let next = (i + 1) % p.len();
            assert_eq!(p.edges()[i].dst, p.edges()[next].org);
        }
    }

    #[test]
    fn test_clean_removes_zero_length_edges() {
        let mut p = Polygon::new(&[
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(0.0, 1.0),
        ])
        .unwrap();
        assert!(p.clean());
        assert_eq!(p.len(), 4);
        assert!((p.signed_area() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_clean_merges_collinear_edges() {
        let mut p = Polygon::new(&[
            Point2d::new(0.0, 0.0),
            Point2d::new(0.5, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(0.0, 1.0),
        ])
        .unwrap();
        assert!(p.clean());
        assert_eq!(p.len(), 4);
        assert!((p.signed_area() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_translate() {
        let mut p = unit_square_ccw();
        p.translate(Point2d::new(0.5, 0.5));
        assert_eq!(p.edges()[0].org, Point2d::new(-0.5, -0.5));
        assert!((p.signed_area() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_rectangle_basic() {
        let r = Rectangle::new(Point2d::new(-400.0, -400.0), Point2d::new(400.0, 400.0));
        assert_eq!(r.axis(), Dimension::Two);
        assert_eq!(r.edges().len(), 4);
        assert!((r.sizes().x - 800.0).abs() < TOL);
        assert!((r.sizes().y - 800.0).abs() < TOL);
        assert!((r.center()).norm() < TOL);
    }

    #[test]
    fn test_rectangle_degenerate_is_1d() {
        let r = Rectangle::new(Point2d::new(-400.0, 0.0), Point2d::new(400.0, 0.0));
        assert_eq!(r.axis(), Dimension::X1d);
        assert_eq!(r.edges().len(), 1);
    }

    #[test]
    fn test_rectangle_set_bypass_flips_diagonal() {
        let mut r = Rectangle::new(Point2d::new(0.0, 0.0), Point2d::new(2.0, 1.0));
        let lb = r.left_bottom();
        // The constructor builds a CW chain, so CCW must correct it.
        let corrected = r.set_bypass(Orientation::Ccw);
        if corrected {
            assert_eq!(r.right_top(), lb);
        }
        assert!(r.signed_area() >= 0.0);
    }
}
