use std::f64::consts::PI;

use num_complex::Complex64;

use super::plan::{Direction, PlanOptions};
use super::tables::{sine_table, SINE_TABLE_LEN};

/// Number of recursion branches a cache node can feed (column stage, row
/// stage / Rader sample stage, spare).
pub(crate) const MAX_CACHE_CHILDREN: usize = 3;

/// One node of the per-plan twiddle cache tree.
///
/// Entries hold exp(+2*pi*j*k/count) and are filled lazily, either from the
/// shared sine table when `count` divides its length, or directly from
/// cos + j*sin. Children are allocated as the recursion descends so every
/// sub-transform length gets its own entry array.
#[derive(Debug)]
pub(crate) struct CacheNode {
    count: usize,
    entries: Vec<Option<Complex64>>,
    children: [Option<Box<CacheNode>>; 3],
}

impl CacheNode {
    pub fn new(count: usize) -> Self {
        CacheNode {
            count,
            entries: vec![None; count],
            children: [None, None, None],
        }
    }

    /// Child node for a sub-transform of length `count`, created on first
    /// use. An existing child of a different length is rebuilt (the split
    /// sequence for a fixed plan length always reproduces the same tree, so
    /// this only happens across plans sharing a node, which does not occur).
    pub fn child(&mut self, index: usize, count: usize) -> &mut CacheNode {
        debug_assert!(index < MAX_CACHE_CHILDREN);
        let slot = &mut self.children[index];
        match slot {
            Some(node) if node.count == count => {}
            _ => *slot = Some(Box::new(CacheNode::new(count))),
        }
        slot.as_mut().unwrap()
    }
}

fn twiddle_from_table(k: usize, count: usize) -> Complex64 {
    let imag_index = SINE_TABLE_LEN / count * k;
    let real_index = (imag_index + SINE_TABLE_LEN / 4) % SINE_TABLE_LEN;
    let table = sine_table();
    Complex64::new(table[real_index], table[imag_index])
}

fn twiddle_from_exp(k: usize, count: usize) -> Complex64 {
    Complex64::from_polar(1.0, 2.0 * PI * k as f64 / count as f64)
}

fn use_table(count: usize, opts: &PlanOptions) -> bool {
    opts.use_table && SINE_TABLE_LEN % count == 0 && count < SINE_TABLE_LEN
}

/// Twiddle exp(2*pi*j*dir*k/count), cached when a cache node is supplied.
pub(crate) fn calc_twiddle(
    k: usize,
    count: usize,
    direction: Direction,
    cache: Option<&mut CacheNode>,
    opts: &PlanOptions,
) -> Complex64 {
    let positive = match cache {
        Some(node) => {
            debug_assert_eq!(node.count, count);
            *node.entries[k].get_or_insert_with(|| {
                if use_table(count, opts) {
                    twiddle_from_table(k, count)
                } else {
                    twiddle_from_exp(k, count)
                }
            })
        }
        None => {
            if use_table(count, opts) {
                twiddle_from_table(k, count)
            } else {
                twiddle_from_exp(k, count)
            }
        }
    };

    match direction {
        Direction::Backward => positive,
        Direction::Forward => positive.conj(),
    }
}
