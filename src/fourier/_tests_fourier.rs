#[cfg(test)]
mod _tests_fourier {
    use ndarray::Array2;
    use num_complex::Complex64;
    use std::f64::consts::PI;

    use super::super::plan::{Direction, Fft1d, Fft2d, FftNd};
    use super::super::small::IMPLEMENTED_RADICES;

    const TOL: f64 = 1e-10;

    /// Deterministic pseudo-random complex samples.
    fn test_signal(n: usize, seed: u64) -> Vec<Complex64> {
        let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (0..n)
            .map(|_| {
                let mut next = || {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    (state >> 11) as f64 / (1u64 << 53) as f64 - 0.5
                };
                Complex64::new(next(), next())
            })
            .collect()
    }

    /// Direct O(N^2) reference transform.
    fn naive_dft(input: &[Complex64], direction: Direction) -> Vec<Complex64> {
        let n = input.len();
        let sign = match direction {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        };
        (0..n)
            .map(|k| {
                let mut acc = Complex64::new(0.0, 0.0);
                for (j, &x) in input.iter().enumerate() {
                    let angle = sign * 2.0 * PI * (k * j) as f64 / n as f64;
                    acc += x * Complex64::from_polar(1.0, angle);
                }
                acc
            })
            .collect()
    }

    fn max_error(a: &[Complex64], b: &[Complex64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).norm())
            .fold(0.0, f64::max)
    }

    fn check_against_naive(n: usize) {
        let signal = test_signal(n, n as u64);
        let reference = naive_dft(&signal, Direction::Forward);

        let mut data = signal.clone();
        let mut plan = Fft1d::new(n, Direction::Forward).unwrap();
        plan.execute(&mut data).unwrap();

        let scale = reference.iter().map(|v| v.norm()).fold(1.0, f64::max);
        assert!(
            max_error(&data, &reference) / scale < TOL,
            "length {} disagrees with the naive DFT",
            n
        );
    }

    #[test]
    fn test_all_hard_radices_match_naive_dft() {
        for &n in IMPLEMENTED_RADICES.iter() {
            check_against_naive(n);
        }
    }

    #[test]
    fn test_power_of_two_lengths() {
        for n in [8, 16, 64, 256] {
            check_against_naive(n);
        }
    }

    #[test]
    fn test_rader_prime_lengths() {
        // Primes outside the hard-coded list exercise the convolution path.
        for n in [23, 29, 31, 37, 101] {
            check_against_naive(n);
        }
    }

    #[test]
    fn test_mixed_composite_lengths() {
        for n in [12, 15, 30, 60, 100, 360, 46, 94] {
            check_against_naive(n);
        }
    }

    #[test]
    fn test_forward_backward_scales_by_n() {
        let n = 96;
        let signal = test_signal(n, 7);
        let mut data = signal.clone();

        let mut forward = Fft1d::new(n, Direction::Forward).unwrap();
        let mut backward = Fft1d::new(n, Direction::Backward).unwrap();
        forward.execute(&mut data).unwrap();
        backward.execute(&mut data).unwrap();

        for (got, want) in data.iter().zip(signal.iter()) {
            assert!((got / n as f64 - want).norm() < TOL);
        }
    }

    #[test]
    fn test_dc_input_gives_spike() {
        let n = 30;
        let mut data = vec![Complex64::new(n as f64, 0.0); n];
        let mut plan = Fft1d::new(n, Direction::Forward).unwrap();
        plan.execute(&mut data).unwrap();

        assert!((data[0] - Complex64::new((n * n) as f64, 0.0)).norm() < TOL);
        for v in &data[1..] {
            assert!(v.norm() < TOL);
        }
    }

    #[test]
    fn test_batched_transforms_are_independent(){
        let n = 16;
        let how_many = 3;
        let signals: Vec<Vec<Complex64>> = (0..how_many)
            .map(|s| test_signal(n, 100 + s as u64))
            .collect();

        let mut batch: Vec<Complex64> = signals.iter().flatten().copied().collect();
        let mut plan = Fft1d::with_batch(n, how_many, Direction::Forward).unwrap();
        plan.execute(&mut batch).unwrap();

        for (s, signal) in signals.iter().enumerate() {
            let reference = naive_dft(signal, Direction::Forward);
            assert!(max_error(&batch[s * n..(s + 1) * n], &reference) < TOL);
        }
    }

    #[test]
    fn test_zero_length_plan_rejected() {
        assert!(Fft1d::new(0, Direction::Forward).is_err());
        assert!(Fft2d::new(0, 4, Direction::Backward).is_err());
        assert!(FftNd::new(&[4, 0, 2], Direction::Forward).is_err());
    }

    #[test]
    fn test_plan_reuse_matches_fresh_plan() {
        // The twiddle cache must not corrupt later executions.
        let n = 60;
        let mut plan = Fft1d::new(n, Direction::Forward).unwrap();
        for seed in 0..3 {
            let signal = test_signal(n, seed);
            let reference = naive_dft(&signal, Direction::Forward);
            let mut data = signal.clone();
            plan.execute(&mut data).unwrap();
            assert!(max_error(&data, &reference) < TOL);
        }
    }

    fn naive_dft_2d(input: &Array2<Complex64>, direction: Direction) -> Array2<Complex64> {
        let (rows, cols) = input.dim();
        let mut tmp = Array2::from_elem((rows, cols), Complex64::new(0.0, 0.0));
        for c in 0..cols {
            let col: Vec<Complex64> = (0..rows).map(|r| input[(r, c)]).collect();
            let out = naive_dft(&col, direction);
            for r in 0..rows {
                tmp[(r, c)] = out[r];
            }
        }
        let mut result = tmp.clone();
        for r in 0..rows {
            let row: Vec<Complex64> = tmp.row(r).to_vec();
            let out = naive_dft(&row, direction);
            for c in 0..cols {
                result[(r, c)] = out[c];
            }
        }
        result
    }

    #[test]
    fn test_2d_matches_naive() {
        let (rows, cols) = (12, 10);
        let flat = test_signal(rows * cols, 42);
        let input = Array2::from_shape_vec((rows, cols), flat).unwrap();
        let reference = naive_dft_2d(&input, Direction::Backward);

        let mut data = input.clone();
        let mut plan = Fft2d::new(rows, cols, Direction::Backward).unwrap();
        plan.execute(&mut data).unwrap();

        for (got, want) in data.iter().zip(reference.iter()) {
            assert!((got - want).norm() < TOL * 10.0);
        }
    }

    #[test]
    fn test_nd_matches_axis_by_axis() {
        let dims = [4usize, 6, 5];
        let total: usize = dims.iter().product();
        let signal = test_signal(total, 9);

        let mut data = signal.clone();
        let mut plan = FftNd::new(&dims, Direction::Forward).unwrap();
        plan.execute(&mut data).unwrap();

        // Reference: transform along each axis with naive DFTs.
        let mut reference = signal;
        for axis in 0..3 {
            let n = dims[axis];
            let after: usize = dims[axis + 1..].iter().product();
            let before: usize = dims[..axis].iter().product();
            let mut next = reference.clone();
            for b in 0..before {
                for a in 0..after {
                    let line: Vec<Complex64> = (0..n)
                        .map(|k| reference[b * n * after + k * after + a])
                        .collect();
                    let out = naive_dft(&line, Direction::Forward);
                    for k in 0..n {
                        next[b * n * after + k * after + a] = out[k];
                    }
                }
            }
            reference = next;
        }

        for (got, want) in data.iter().zip(reference.iter()) {
            assert!((got - want).norm() < TOL * 10.0);
        }
    }
}
