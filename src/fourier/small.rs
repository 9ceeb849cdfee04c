use std::f64::consts::PI;
use std::sync::OnceLock;

use num_complex::Complex64;

use super::kernels::Layout;
use super::plan::Direction;

/// Transform lengths with dedicated butterflies. Any plan length divisible
/// by one of these is split against the largest of them first.
pub const IMPLEMENTED_RADICES: [usize; 11] = [2, 3, 4, 5, 6, 7, 11, 13, 17, 19, 47];

static RADIX_TABLES: [OnceLock<Vec<Complex64>>; IMPLEMENTED_RADICES.len()] =
    [const { OnceLock::new() }; IMPLEMENTED_RADICES.len()];

/// Index of `count` inside [`IMPLEMENTED_RADICES`], if implemented.
pub(crate) fn radix_index(count: usize) -> Option<usize> {
    IMPLEMENTED_RADICES.iter().position(|&r| r == count)
}

/// Largest implemented radix dividing `n`, if any.
pub(crate) fn largest_dividing_radix(n: usize) -> Option<usize> {
    IMPLEMENTED_RADICES
        .iter()
        .rev()
        .copied()
        .find(|&r| n % r == 0)
}

/// Forward twiddle table exp(-2*pi*j*k/count), built once per radix.
fn radix_table(count: usize) -> &'static [Complex64] {
    let index = radix_index(count).expect("not an implemented radix");
    RADIX_TABLES[index].get_or_init(|| {
        (0..count)
            .map(|k| Complex64::from_polar(1.0, -2.0 * PI * k as f64 / count as f64))
            .collect()
    })
}

#[inline]
fn mul_j(v: Complex64, sign: f64) -> Complex64 {
    // v * (sign * j)
    Complex64::new(-sign * v.im, sign * v.re)
}

/// Hard-coded butterfly for one of the implemented radices. The generic
/// branch evaluates out[k] = sum_j w[(k*j) mod N] * x[j] against the
/// precomputed radix table; lengths 2 and 4 avoid multiplications entirely.
pub(crate) fn execute_small(
    input: &[Complex64],
    output: &mut [Complex64],
    layout: &Layout,
    direction: Direction,
) {
    let n = layout.count;
    match n {
        2 => {
            for s in 0..layout.how_many {
                let x0 = input[layout.iv(s, 0)];
                let x1 = input[layout.iv(s, 1)];
                output[layout.ov(s, 0)] = x0 + x1;
                output[layout.ov(s, 1)] = x0 - x1;
            }
        }
        4 => {
            // Sign of j follows the transform direction.
            let d = match direction {
                Direction::Forward => -1.0,
                Direction::Backward => 1.0,
            };
            for s in 0..layout.how_many {
                let x0 = input[layout.iv(s, 0)];
                let x1 = input[layout.iv(s, 1)];
                let x2 = input[layout.iv(s, 2)];
                let x3 = input[layout.iv(s, 3)];
                output[layout.ov(s, 0)] = x0 + x1 + x2 + x3;
                output[layout.ov(s, 1)] = x0 + mul_j(x1, d) - x2 + mul_j(x3, -d);
                output[layout.ov(s, 2)] = x0 - x1 + x2 - x3;
                output[layout.ov(s, 3)] = x0 + mul_j(x1, -d) - x2 + mul_j(x3, d);
            }
        }
        _ => {
            let w = radix_table(n);
            let backward = direction == Direction::Backward;
            for s in 0..layout.how_many {
                let mut dc = Complex64::new(0.0, 0.0);
                for j in 0..n {
                    dc += input[layout.iv(s, j)];
                }
                output[layout.ov(s, 0)] = dc;

                for k in 1..n {
                    let mut acc = input[layout.iv(s, 0)];
                    for j in 1..n {
                        let tw = w[k * j % n];
                        let tw = if backward { tw.conj() } else { tw };
                        acc += tw * input[layout.iv(s, j)];
                    }
                    output[layout.ov(s, k)] = acc;
                }
            }
        }
    }
}
