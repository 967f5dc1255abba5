//! Uniform random permutations with an injectable source of randomness.

use rand::Rng;

use crate::elem::ElementsMut;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns a value in `0..=upper`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

/// Adapts a bare generator of random `u32` values.
///
/// The raw value is mapped into range with a modulo, so the result is only as uniform as
/// `upper + 1` divides into `2^32`.
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> u32> RandomSource for FnSource<F> {
    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        let raw = (self.0)() as usize;
        raw % (upper + 1)
    }
}

/// Replays a fixed list of indices, cycling when it runs out. A scripted index larger than the
/// requested bound is reduced modulo `upper + 1`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, draws: 0 }
    }

    /// Number of indices handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        let raw = if self.script.is_empty() {
            0
        } else {
            self.script[self.draws % self.script.len()]
        };
        self.draws += 1;
        raw % (upper + 1)
    }
}

/// Shuffles `v` into a uniformly random order, given a uniform `rng`.
///
/// Fisher–Yates: walking `i` down from the last index to 1, element `i` is exchanged with the
/// element at a position drawn from `0..=i`. Exactly `len - 1` draws and `len - 1` swaps are
/// performed, sequences shorter than two elements are left untouched without drawing.
pub fn shuffle<S, R>(v: &mut S, rng: &mut R)
where
    S: ElementsMut + ?Sized,
    R: RandomSource + ?Sized,
{
    for i in (1..v.len()).rev() {
        let j = rng.next_index(i);
        debug_assert!(j <= i);
        v.swap(i, j);
    }
}
