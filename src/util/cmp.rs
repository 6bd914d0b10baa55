#![cfg(test)]

use std::cmp::Ordering;

/// A named value with a priority, ordered only by that priority so ties are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked {
    pub priority: i32,
    pub name: &'static str,
}

impl Ranked {
    pub const fn new(priority: i32, name: &'static str) -> Ranked {
        Ranked { priority, name }
    }
}

pub fn by_priority(left: &Ranked, right: &Ranked) -> Ordering {
    left.priority.cmp(&right.priority)
}

/// A deterministic, well-mixed sequence of `len` values in `0..modulus`.
pub fn scrambled(len: usize, modulus: u64) -> impl Iterator<Item = u64> {
    (0..len as u64).map(move |i| (i.wrapping_mul(7919).wrapping_add(104_729) ^ (i >> 3)) % modulus)
}
