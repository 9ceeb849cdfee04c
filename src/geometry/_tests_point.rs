#[cfg(test)]
mod _tests_point {
    use super::super::edge::Edge2d;
    use super::super::point::{classify, classify_points, Point2d, PointClass};

    const TOL: f64 = 1e-2;

    #[test]
    fn test_classify_left_right() {
        let p0 = Point2d::new(0.0, 0.0);
        let p1 = Point2d::new(10.0, 0.0);

        assert_eq!(
            classify_points(Point2d::new(5.0, 1.0), p0, p1, TOL),
            PointClass::Left
        );
        assert_eq!(
            classify_points(Point2d::new(5.0, -1.0), p0, p1, TOL),
            PointClass::Right
        );
    }

    #[test]
    fn test_classify_collinear_cases() {
        let p0 = Point2d::new(0.0, 0.0);
        let p1 = Point2d::new(10.0, 0.0);

        assert_eq!(
            classify_points(Point2d::new(-2.0, 0.0), p0, p1, TOL),
            PointClass::Behind
        );
        assert_eq!(
            classify_points(Point2d::new(12.0, 0.0), p0, p1, TOL),
            PointClass::Beyond
        );
        assert_eq!(classify_points(p0, p0, p1, TOL), PointClass::Origin);
        assert_eq!(classify_points(p1, p0, p1, TOL), PointClass::Destination);
        assert_eq!(
            classify_points(Point2d::new(5.0, 0.0), p0, p1, TOL),
            PointClass::Between
        );
    }

    #[test]
    fn test_classify_respects_tolerance() {
        // A point a hair off the line still counts as on it at nm scale.
        let p0 = Point2d::new(0.0, 0.0);
        let p1 = Point2d::new(100.0, 0.0);
        let p = Point2d::new(50.0, 1e-5);
        assert_eq!(classify_points(p, p0, p1, TOL), PointClass::Between);
    }

    #[test]
    fn test_classify_against_edge() {
        let edge = Edge2d::from_coords(0.0, 0.0, 0.0, 10.0);
        assert_eq!(classify(Point2d::new(-1.0, 5.0), &edge), PointClass::Left);
        assert_eq!(classify(Point2d::new(1.0, 5.0), &edge), PointClass::Right);
    }
}
