#[cfg(test)]
mod _tests_eikonal {
    use ndarray::{Array2, Array3};

    use super::super::solver::{solve2d, solve3d, solve_eikonal, SpatialOrder};

    #[test]
    fn test_1d_uniform_speed_gives_linear_ramp() {
        let n = 50;
        let h = 0.1;
        let mut phi = vec![-1.0; n];
        phi[0] = 0.0;
        let speed = vec![1.0; n];

        solve_eikonal(&mut phi, &speed, None, SpatialOrder::First, [n], [h]).unwrap();

        for (k, &v) in phi.iter().enumerate() {
            assert!(
                (v - k as f64 * h).abs() < 1e-9,
                "phi[{}] = {} should be {}",
                k,
                v,
                k as f64 * h
            );
        }
    }

    #[test]
    fn test_1d_speed_scales_travel_time() {
        let n = 20;
        let h = 1.0;
        let mut phi = vec![-1.0; n];
        phi[0] = 0.0;
        let speed = vec![2.0; n];

        solve_eikonal(&mut phi, &speed, None, SpatialOrder::First, [n], [h]).unwrap();
        assert!((phi[n - 1] - (n - 1) as f64 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_speed_marks_point_outside() {
        let n = 10;
        let mut phi = vec![-1.0; n];
        phi[0] = 0.0;
        let mut speed = vec![1.0; n];
        speed[5] = 0.0;

        solve_eikonal(&mut phi, &speed, None, SpatialOrder::First, [n], [1.0]).unwrap();

        assert_eq!(phi[5], f64::MAX);
        // The front cannot pass the blocked point in 1D.
        assert_eq!(phi[6], f64::MAX);
    }

    #[test]
    fn test_negative_mask_excludes_points() {
        let n = 10;
        let mut phi = vec![-1.0; n];
        phi[0] = 0.0;
        let speed = vec![1.0; n];
        let mut mask = vec![1.0; n];
        mask[3] = -1.0;

        solve_eikonal(&mut phi, &speed, Some(&mask), SpatialOrder::First, [n], [1.0]).unwrap();
        assert_eq!(phi[3], f64::MAX);
    }

    #[test]
    fn test_2d_distance_from_corner() {
        // Unit speed, front at the origin corner: phi approximates the
        // Euclidean distance along the axes.
        let (rows, cols) = (16, 16);
        let mut phi = Array2::from_elem((rows, cols), -1.0);
        phi[(0, 0)] = 0.0;
        let rates = Array2::from_elem((rows, cols), 1.0);

        solve2d(&mut phi, &rates, 1.0, 1.0).unwrap();

        // Along the axes the solution is exact.
        for k in 0..cols {
            assert!((phi[(0, k)] - k as f64).abs() < 1e-6);
        }
        for k in 0..rows {
            assert!((phi[(k, 0)] - k as f64).abs() < 1e-6);
        }
        // Diagonal values approximate sqrt(2)*k from above within the
        // discretization error.
        let diag = phi[(10, 10)];
        let exact = 10.0 * std::f64::consts::SQRT_2;
        assert!(diag >= exact - 1e-6);
        assert!(diag < exact + 1.5);
    }

    #[test]
    fn test_2d_second_order_converges_quadratically() {
        // Concentric front: solve from a filled band around the center and
        // compare with the radial distance at two resolutions.
        fn l2_error(n: usize) -> f64 {
            let h = 2.0 / (n - 1) as f64;
            let center = (n / 2) as f64;
            let radius = 0.25 / h;

            let mut phi = Array2::from_elem((n, n), -1.0);
            let rates = Array2::from_elem((n, n), 1.0);
            for r in 0..n {
                for c in 0..n {
                    let d = ((r as f64 - center).powi(2) + (c as f64 - center).powi(2)).sqrt();
                    if d <= radius {
                        phi[(r, c)] = (d - radius) * h + radius * h;
                    }
                }
            }

            solve2d(&mut phi, &rates, h, h).unwrap();

            let mut err2 = 0.0;
            let mut count = 0;
            for r in 0..n {
                for c in 0..n {
                    let d = ((r as f64 - center).powi(2) + (c as f64 - center).powi(2)).sqrt() * h;
                    if d > radius * h {
                        let e = phi[(r, c)] - d;
                        err2 += e * e;
                        count += 1;
                    }
                }
            }
            (err2 / count as f64).sqrt()
        }

        let coarse = l2_error(41);
        let fine = l2_error(81);
        // Halving h should shrink the L2 error by clearly more than 2x.
        assert!(
            fine < coarse / 2.5,
            "no second-order convergence: coarse {} fine {}",
            coarse,
            fine
        );
    }

    #[test]
    fn test_3d_front_from_top_slice() {
        let (rows, cols, slices) = (4, 5, 8);
        let mut phi = Array3::from_elem((rows, cols, slices), -1.0);
        let rates = Array3::from_elem((rows, cols, slices), 1.0);

        // Front on the last slice, marching toward slice 0.
        for r in 0..rows {
            for c in 0..cols {
                phi[(r, c, slices - 1)] = 0.0;
            }
        }

        solve3d(&mut phi, &rates, 1.0, 1.0, 0.5).unwrap();

        for r in 0..rows {
            for c in 0..cols {
                for s in 0..slices {
                    let expected = (slices - 1 - s) as f64 * 0.5;
                    assert!(
                        (phi[(r, c, s)] - expected).abs() < 1e-9,
                        "phi({}, {}, {}) = {}",
                        r,
                        c,
                        s,
                        phi[(r, c, s)]
                    );
                }
            }
        }
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut phi = Array2::from_elem((3, 3), -1.0);
        let rates = Array2::from_elem((3, 4), 1.0);
        assert!(solve2d(&mut phi, &rates, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_empty_grid_rejected() {
        let mut phi: Vec<f64> = Vec::new();
        let speed: Vec<f64> = Vec::new();
        assert!(solve_eikonal(&mut phi, &speed, None, SpatialOrder::First, [0], [1.0]).is_err());
    }
}
