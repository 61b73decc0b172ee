//! Fisher-Yates shuffle over a copy of the input.

use rand::Rng;

/// Return a uniformly shuffled copy of `items`. The input is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Pick `count` items without replacement, in random order.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut out = shuffle(items, rng);
    out.truncate(count);
    out
}
