//! Uniform random sources the alias sampler draws from.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::{Rng, RngCore};

/// Anything that can hand out uniform indices and uniform floats in `[0, 1)`.
///
/// Every [`rand::Rng`] already qualifies, so a `StdRng`, a `Pcg64` or
/// `rand::rng()` can be passed straight to
/// [`AliasSampler::sample_index`](crate::AliasSampler::sample_index).
pub trait UniformSource {
    /// Uniform integer in `0..n`. `n` is never zero when called by this crate.
    fn next_index(&mut self, n: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// One bucket index and one coin, drawn in that order.
    ///
    /// A sampler draw calls this exactly once. Sources that need to do work
    /// around a draw (locking, accounting) override it.
    #[inline]
    fn next_pair(&mut self, n: usize) -> (usize, f64) {
        let j = self.next_index(n);
        let coin = self.next_unit();
        (j, coin)
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

/// A generator shared between threads or samplers behind a mutex.
///
/// Clones share the same underlying stream. Each draw takes the lock once for
/// both of its uniforms and releases it before returning.
#[derive(Debug)]
pub struct SharedSource<R> {
    inner: Arc<Mutex<R>>,
}

impl<R: RngCore> SharedSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Run `f` with exclusive access to the generator, e.g. to reseed it.
    pub fn with<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

impl<R> Clone for SharedSource<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RngCore> UniformSource for SharedSource<R> {
    fn next_index(&mut self, n: usize) -> usize {
        self.inner.lock().random_range(0..n)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.lock().random()
    }

    fn next_pair(&mut self, n: usize) -> (usize, f64) {
        let mut rng = self.inner.lock();
        let j = rng.random_range(0..n);
        let coin = rng.random();
        (j, coin)
    }
}

/// Replays a fixed list of `(index, coin)` draws.
#[cfg(test)]
pub(crate) struct Scripted {
    draws: std::collections::VecDeque<(usize, f64)>,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(draws: &[(usize, f64)]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl UniformSource for Scripted {
    fn next_index(&mut self, _n: usize) -> usize {
        self.next_pair(0).0
    }

    fn next_unit(&mut self) -> f64 {
        self.next_pair(0).1
    }

    fn next_pair(&mut self, _n: usize) -> (usize, f64) {
        self.draws.pop_front().expect("script exhausted")
    }
}
