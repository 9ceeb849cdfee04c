use num_complex::Complex64;

use super::cache::{calc_twiddle, CacheNode};
use super::plan::{Direction, PlanOptions};
use super::small::{execute_small, largest_dividing_radix, radix_index};
use super::tables::{bitrev_table, is_power2, is_prime, modpow, primitive_root};

/// Addressing of a batch of transforms inside flat buffers.
///
/// Sample k of signal s lives at `s*istride + k*idist` in the input and
/// `s*ostride + k*odist` in the output.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Layout {
    pub count: usize,
    pub how_many: usize,
    pub idist: usize,
    pub istride: usize,
    pub odist: usize,
    pub ostride: usize,
}

impl Layout {
    /// Signals stored back to back with contiguous samples.
    pub fn contiguous(count: usize, how_many: usize) -> Self {
        Layout {
            count,
            how_many,
            idist: 1,
            istride: count,
            odist: 1,
            ostride: count,
        }
    }

    #[inline]
    pub fn iv(&self, s: usize, k: usize) -> usize {
        s * self.istride + k * self.idist
    }

    #[inline]
    pub fn ov(&self, s: usize, k: usize) -> usize {
        s * self.ostride + k * self.odist
    }
}

/// Length-1 transform: a copy.
fn singular(input: &[Complex64], output: &mut [Complex64], layout: &Layout) {
    for s in 0..layout.how_many {
        output[layout.ov(s, 0)] = input[layout.iv(s, 0)];
    }
}

/// Iterative Cooley-Tukey radix-2 with a precomputed bit-reversal
/// permutation. The first stage consumes the (permuted) input, later stages
/// run in place on the output buffer.
fn radix2(
    input: &[Complex64],
    output: &mut [Complex64],
    layout: &Layout,
    direction: Direction,
    mut cache: Option<&mut CacheNode>,
    opts: &PlanOptions,
) {
    let n = layout.count;
    let bitrev = bitrev_table(n);

    for s in 0..layout.how_many {
        for k in (0..n).step_by(2) {
            let a = input[layout.iv(s, bitrev[k])];
            let b = input[layout.iv(s, bitrev[k + 1])];
            output[layout.ov(s, k)] = a + b;
            output[layout.ov(s, k + 1)] = a - b;
        }

        let mut stage = 2;
        while stage < n {
            let jump = stage << 1;
            for group in 0..stage {
                let twiddle =
                    calc_twiddle(n * group / jump, n, direction, cache.as_deref_mut(), opts);
                let mut pair = group;
                while pair < n {
                    let matched = pair + stage;
                    let t = twiddle * output[layout.ov(s, matched)];
                    output[layout.ov(s, matched)] = output[layout.ov(s, pair)] - t;
                    output[layout.ov(s, pair)] += t;
                    pair += jump;
                }
            }
            stage <<= 1;
        }
    }
}

/// Rader's algorithm for prime lengths without a dedicated butterfly.
///
/// Samples are permuted by powers of the inverse primitive root; the
/// spectrum (minus the DC bin) is then the cyclic convolution of that
/// sequence with the generator-ordered twiddles, performed with two forward
/// transforms of length N-1, a pointwise product, and a backward transform.
fn rader(
    input: &[Complex64],
    output: &mut [Complex64],
    layout: &Layout,
    direction: Direction,
    mut cache: Option<&mut CacheNode>,
    opts: &PlanOptions,
) {
    let n = layout.count;
    let g = primitive_root(n);
    // Next generator: g^(-1) = g^(N-2) mod N.
    let g_inv = modpow(g as u64, (n - 2) as u64, n as u64) as usize;
    let m = n - 1;

    let twiddle_indexes: Vec<usize> = (0..m)
        .map(|k| modpow(g as u64, k as u64, n as u64) as usize)
        .collect();
    let sample_indexes: Vec<usize> = (0..m)
        .map(|k| modpow(g_inv as u64, k as u64, n as u64) as usize)
        .collect();

    let conv_layout = Layout::contiguous(m, 1);

    // Spectrum of the generator-ordered twiddle sequence.
    let twiddle_seq: Vec<Complex64> = twiddle_indexes
        .iter()
        .map(|&i| calc_twiddle(i, n, direction, cache.as_deref_mut(), opts))
        .collect();
    let mut twiddle_spectrum = vec![Complex64::new(0.0, 0.0); m];
    {
        let child = cache.as_deref_mut().map(|c| c.child(0, m));
        dispatch(
            &twiddle_seq,
            &mut twiddle_spectrum,
            &conv_layout,
            Direction::Forward,
            child,
            opts,
        );
    }

    let mut sample_cache = cache.map(|c| c.child(1, m));
    let mut conv_in = vec![Complex64::new(0.0, 0.0); m];
    let mut conv_out = vec![Complex64::new(0.0, 0.0); m];

    for s in 0..layout.how_many {
        for k in 0..m {
            conv_in[k] = input[layout.iv(s, sample_indexes[k])];
        }

        dispatch(
            &conv_in,
            &mut conv_out,
            &conv_layout,
            Direction::Forward,
            sample_cache.as_deref_mut(),
            opts,
        );

        for k in 0..m {
            conv_out[k] *= twiddle_spectrum[k];
        }

        dispatch(
            &conv_out,
            &mut conv_in,
            &conv_layout,
            Direction::Backward,
            sample_cache.as_deref_mut(),
            opts,
        );

        // The library never normalizes, so the convolution result must be
        // scaled down here.
        let inv_m = 1.0 / m as f64;
        for v in conv_in.iter_mut() {
            *v *= inv_m;
        }

        let x0 = input[layout.iv(s, 0)];
        let mut dc = x0;
        for k in 1..n {
            dc += input[layout.iv(s, twiddle_indexes[k - 1])];
        }
        output[layout.ov(s, 0)] = dc;

        for k in 1..n {
            output[layout.ov(s, twiddle_indexes[k - 1])] = conv_in[k - 1] + x0;
        }
    }
}

/// Factor of `n` to split against: the largest implemented radix dividing
/// it, else the largest power of two dividing it, else the smallest odd
/// divisor. The boolean reports whether a dedicated butterfly exists.
fn split_factor(n: usize) -> (usize, bool) {
    if let Some(radix) = largest_dividing_radix(n) {
        return (radix, true);
    }
    if n % 2 == 0 {
        let mut radix = 1usize << (usize::BITS - 1 - n.leading_zeros());
        while n % radix != 0 {
            radix >>= 1;
        }
        return (radix, false);
    }
    let mut div = 3;
    while n % div != 0 {
        div += 2;
    }
    (div, false)
}

/// Composite-length decomposition: p column transforms of length n/p,
/// inter-stage twiddles exp(2*pi*j*dir*r*c/n), then n/p row transforms of
/// length p, with the transpose folded into the output strides.
fn split(
    input: &[Complex64],
    output: &mut [Complex64],
    layout: &Layout,
    direction: Direction,
    mut cache: Option<&mut CacheNode>,
    opts: &PlanOptions,
) {
    let n = layout.count;
    let (p, has_butterfly) = split_factor(n);
    let q = n / p;

    let col_layout = Layout {
        count: p,
        how_many: q,
        idist: q,
        istride: 1,
        odist: q,
        ostride: 1,
    };
    let row_layout = Layout {
        count: q,
        how_many: p,
        idist: 1,
        istride: q,
        odist: p,
        ostride: 1,
    };

    let mut buf_in = vec![Complex64::new(0.0, 0.0); n];
    let mut buf_out = vec![Complex64::new(0.0, 0.0); n];

    for s in 0..layout.how_many {
        for k in 0..n {
            buf_in[k] = input[layout.iv(s, k)];
        }

        // Column-wise transforms of length p.
        if has_butterfly {
            execute_small(&buf_in, &mut buf_out, &col_layout, direction);
        } else if p % 2 == 0 {
            let child = cache.as_deref_mut().map(|c| c.child(0, p));
            radix2(&buf_in, &mut buf_out, &col_layout, direction, child, opts);
        } else {
            let child = cache.as_deref_mut().map(|c| c.child(0, p));
            rader(&buf_in, &mut buf_out, &col_layout, direction, child, opts);
        }

        // Inter-stage twiddle multiplications.
        for c in 1..q {
            for r in 1..p {
                let twiddle = calc_twiddle(r * c, n, direction, cache.as_deref_mut(), opts);
                buf_out[col_layout.ov(c, r)] *= twiddle;
            }
        }

        // Row-wise transforms of length q.
        std::mem::swap(&mut buf_in, &mut buf_out);
        let child = cache.as_deref_mut().map(|c| c.child(1, q));
        dispatch(&buf_in, &mut buf_out, &row_layout, direction, child, opts);

        for k in 0..n {
            output[layout.ov(s, k)] = buf_out[k];
        }
    }
}

/// Select the transform kernel by length.
pub(crate) fn dispatch(
    input: &[Complex64],
    output: &mut [Complex64],
    layout: &Layout,
    direction: Direction,
    cache: Option<&mut CacheNode>,
    opts: &PlanOptions,
) {
    let n = layout.count;
    if n == 1 {
        singular(input, output, layout);
    } else if radix_index(n).is_some() {
        execute_small(input, output, layout, direction);
    } else if is_power2(n) {
        radix2(input, output, layout, direction, cache, opts);
    } else if is_prime(n) {
        rader(input, output, layout, direction, cache, opts);
    } else {
        split(input, output, layout, direction, cache, opts);
    }
}
