//! Page State Operations
//!
//! Pure updates applied to the item list.

use crate::config::{IntRange, RandomizeRanges};
use crate::models::Item;

/// Source of uniform values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in the inclusive range
    fn pick(&mut self, range: IntRange) -> i32 {
        let offset = (self.next_unit() * range.span() as f64).floor() as i64;
        (range.min as i64 + offset.clamp(0, range.span() - 1)) as i32
    }
}

/// Browser `Math.random()`
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Set the position of the item with `id`. Returns false when no item matches.
pub fn move_item(items: &mut [Item], id: &str, x: i32, y: i32) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.x = x;
            item.y = y;
            true
        }
        None => false,
    }
}

/// Fresh list with every item given a new temperature and position
pub fn randomized(items: &[Item], ranges: &RandomizeRanges, rng: &mut impl RandomSource) -> Vec<Item> {
    items
        .iter()
        .map(|item| Item {
            temp: rng.pick(ranges.temp),
            x: rng.pick(ranges.position),
            y: rng.pick(ranges.position),
            ..item.clone()
        })
        .collect()
}

/// Cycles through fixed values
#[cfg(test)]
pub(crate) struct Sequence {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl Sequence {
    pub(crate) fn new(values: &[f64]) -> Self {
        Self { values: values.to_vec(), next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for Sequence {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}
