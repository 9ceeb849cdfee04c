//! 1D convolution with a centered kernel, used by the bake diffusion stage.

/// How samples past the signal ends are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Indices reflect off the boundaries (..., 2, 1, 0, 1, 2, ...).
    Symmetric,
    /// Indices wrap around (..., n-1, 0, 1, ...).
    Circular,
}

fn reflect_index(w: i64, len: i64) -> usize {
    // Reflection help:
    //                   |     |
    //         0  1  2  1  0  1  2  1  0
    //         0  1  2  3  4  3  2  1  0
    //        -4 -3 -2 -1  0  1  2  3  4
    let w = w.abs();
    if w >= len {
        let is_falling = (w / (len - 1)) % 2 == 1;
        if is_falling {
            ((len - 1) - w % (len - 1)) as usize
        } else {
            (w % (len - 1)) as usize
        }
    } else {
        w as usize
    }
}

/// Convolve `signal` with the centered `kernel` under the given boundary.
/// A single-sample signal is returned unchanged.
pub fn conv1d(signal: &[f64], kernel: &[f64], boundary: BoundaryKind) -> Vec<f64> {
    if signal.len() <= 1 {
        return signal.to_vec();
    }

    let n = signal.len() as i64;
    let kmin = -((kernel.len() as f64 / 2.0).floor() as i64);

    let mut result = vec![0.0; signal.len()];
    for (i, out) in result.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (k, &kv) in kernel.iter().enumerate() {
            let w = i as i64 + kmin + k as i64;
            let v = match boundary {
                BoundaryKind::Circular => ((w % n + n) % n) as usize,
                BoundaryKind::Symmetric => reflect_index(w, n),
            };
            sum += signal[v] * kv;
        }
        *out = sum;
    }
    result
}
