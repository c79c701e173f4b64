//! Walker/Vose alias method for O(1) sampling from a discrete distribution.

use crate::error::BuildError;
use crate::source::UniformSource;

/// Precomputed alias tables for one fixed weight vector.
///
/// Immutable once built; a different distribution needs a new sampler.
#[derive(Debug, Clone)]
pub struct AliasSampler {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

#[allow(clippy::len_without_is_empty)]
impl AliasSampler {
    /// Construct an alias table from non-negative weights. O(n).
    ///
    /// The weights need not sum to one; they are normalized here.
    ///
    /// # Errors
    /// * [`BuildError::Empty`] if `weights` is empty.
    /// * [`BuildError::Negative`] for the first negative weight.
    /// * [`BuildError::Degenerate`] if the sum is zero or not finite.
    pub fn new(weights: &[f64]) -> Result<Self, BuildError> {
        let sum = validate(weights)?;
        let n = weights.len();

        // Divide first: w / sum <= 1, so a tiny sum cannot overflow to inf.
        let mut scaled: Vec<f64> = weights.iter().map(|&w| w / sum * n as f64).collect();

        let mut prob = vec![0.0f64; n];
        let mut alias = vec![0usize; n];

        let (mut small, mut large): (Vec<usize>, Vec<usize>) =
            (0..n).partition(|&i| scaled[i] <= 1.0);

        while let (Some(&j), Some(&k)) = (small.last(), large.last()) {
            small.pop();
            large.pop();

            prob[j] = scaled[j]; // in [0,1]
            alias[j] = k;

            scaled[k] = scaled[k] + scaled[j] - 1.0;

            if scaled[k] > 1.0 {
                large.push(k);
            } else {
                small.push(k);
            }
        }

        // Rounding can strand entries in either list.
        for i in small.into_iter().chain(large) {
            prob[i] = 1.0;
            alias[i] = i;
        }

        Ok(Self { prob, alias })
    }

    /// Draw a single index in `0..len()` in O(1).
    ///
    /// Uses exactly one [`UniformSource::next_pair`]: a uniform bucket and an
    /// independent coin.
    #[inline]
    pub fn sample_index<S: UniformSource + ?Sized>(&self, source: &mut S) -> usize {
        let (j, coin) = source.next_pair(self.prob.len());
        if coin < self.prob[j] { j } else { self.alias[j] }
    }

    /// Move the tables together with a random source they will own.
    pub fn bind<S: UniformSource>(self, source: S) -> BoundSampler<S> {
        BoundSampler {
            sampler: self,
            source,
        }
    }

    /// Number of categories. Never zero.
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    /// Probability that a draw landing in bucket `i` keeps `i`.
    pub fn prob(&self) -> &[f64] {
        &self.prob
    }

    /// Fallback index per bucket. Entries with `prob[i] == 1` point at `i`.
    pub fn alias(&self) -> &[usize] {
        &self.alias
    }

    /// Draw `draws` samples, returning counts per index.
    #[cfg(test)]
    pub(crate) fn sample_counts<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        draws: usize,
    ) -> Vec<usize> {
        let mut counts = vec![0usize; self.len()];
        for _ in 0..draws {
            counts[self.sample_index(source)] += 1;
        }
        counts
    }
}

/// Checks every weight and returns their sum.
fn validate(weights: &[f64]) -> Result<f64, BuildError> {
    if weights.is_empty() {
        return Err(BuildError::Empty);
    }

    let mut sum = 0.0f64;
    for (index, &value) in weights.iter().enumerate() {
        if value < 0.0 {
            return Err(BuildError::Negative { index, value });
        }
        sum += value;
    }
    // NaN weights land here too.
    if !sum.is_finite() || sum <= 0.0 {
        return Err(BuildError::Degenerate { sum });
    }
    Ok(sum)
}

/// An [`AliasSampler`] that owns its random source.
///
/// Also an endless iterator of indices, so `.take(k)` yields `k` draws.
#[derive(Debug, Clone)]
pub struct BoundSampler<S> {
    sampler: AliasSampler,
    source: S,
}

impl<S: UniformSource> BoundSampler<S> {
    /// Next weighted index in `0..len()`.
    #[inline]
    pub fn draw(&mut self) -> usize {
        self.sampler.sample_index(&mut self.source)
    }

    pub fn sampler(&self) -> &AliasSampler {
        &self.sampler
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_parts(self) -> (AliasSampler, S) {
        (self.sampler, self.source)
    }
}

impl<S: UniformSource> Iterator for BoundSampler<S> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
