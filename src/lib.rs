//! # vose
//!
//! Weighted random indices in O(1) per draw.
//!
//! This crate is a compact implementation of
//! [Vose's alias method](https://en.wikipedia.org/wiki/Alias_method)
//! (Walker's method with Vose's numerically stable construction). Given `n`
//! non-negative weights it builds two tables of length `n` once, in O(n), and
//! from then on every draw is one uniform bucket plus one biased coin flip.
//!
//! There are two ways to use it:
//!
//! 1. **Bare indices** with [`AliasSampler`], when the caller keeps its own
//!    parallel list of payloads.
//! 2. **Weighted lists** with [`WeightedList::from_pairs`], which keeps the
//!    payloads next to the sampler.
//!
//! ## Quick start (indices)
//!
//! ```rust
//! use rand::SeedableRng;
//! use vose::AliasSampler;
//!
//! # fn main() -> Result<(), vose::BuildError> {
//! let names = ["ada", "grace", "edsger"];
//! let sampler = AliasSampler::new(&[5.0, 3.0, 2.0])?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(2014);
//! let i = sampler.sample_index(&mut rng);
//! assert!(i < names.len());
//!
//! // Or let the sampler own its generator and iterate.
//! let picks: Vec<&str> = sampler
//!     .bind(rand::rng())
//!     .take(4)
//!     .map(|i| names[i])
//!     .collect();
//! assert_eq!(picks.len(), 4);
//! # Ok(()) }
//! ```
//!
//! ## Quick start (pairs)
//!
//! ```rust
//! use vose::WeightedList;
//!
//! # fn main() -> Result<(), vose::BuildError> {
//! let streets = WeightedList::from_pairs([
//!     ("Main St", 60.0),
//!     ("Oak Ave", 30.0),
//!     ("Elm Rd", 10.0),
//! ])?;
//!
//! let mut rng = rand::rng();
//! let street = streets.sample(&mut rng); // &&str
//! assert!(streets.items().contains(street));
//! # Ok(()) }
//! ```
//!
//! ## Random sources
//! Anything implementing [`UniformSource`] can drive a draw, and every
//! [`rand::Rng`] does. To share one seeded stream across threads or samplers,
//! wrap it in a [`SharedSource`]; each draw then holds its lock once.
//!
//! ## Performance
//! * **Build**: O(n).
//! * **Sample**: O(1) per draw (2 random numbers, 1 branch).
//! * **Space**: 2 vectors of length `n` (f64 + usize).
//!
//! ## Gotchas
//! * Weights must be **non-negative** and not all zero; a NaN or infinite
//!   total is rejected.
//! * This is for *fixed* distributions. If the weights change, build a new
//!   sampler.

mod error;
mod source;
mod walker;

pub use error::BuildError;
pub use source::{SharedSource, UniformSource};
pub use walker::{AliasSampler, BoundSampler};

/// Items paired with weights, sampled through an internal [`AliasSampler`].
///
/// Build it from any iterator of `(item, weight)` where `weight >= 0`.
#[derive(Debug, Clone)]
pub struct WeightedList<T> {
    sampler: AliasSampler,
    items: Vec<T>,
    total: f64,
}

impl<T> WeightedList<T> {
    /// Build from any `(item, weight)` iterator.
    ///
    /// # Errors
    /// * [`BuildError::Empty`] if there are no items.
    /// * [`BuildError::Negative`] if any weight is negative.
    /// * [`BuildError::Degenerate`] if the sum of weights is zero or not finite.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (items, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        let sampler = AliasSampler::new(&weights)?;
        Ok(Self {
            sampler,
            items,
            total: weights.iter().sum(),
        })
    }

    /// Sample an item **by reference** (no `Clone` bound).
    pub fn sample<'a, S: UniformSource + ?Sized>(&'a self, source: &mut S) -> &'a T {
        &self.items[self.sampler.sample_index(source)]
    }

    /// Sample an item **by value** (clones the chosen element).
    ///
    /// Prefer [`sample`](Self::sample) if you don't need ownership.
    pub fn sample_owned<S: UniformSource + ?Sized>(&self, source: &mut S) -> T
    where
        T: Clone,
    {
        self.sample(source).clone()
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: an empty list cannot be built.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the weights the list was built from.
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// The items, in the order they were given.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The alias tables indexing into [`items`](Self::items).
    pub fn sampler(&self) -> &AliasSampler {
        &self.sampler
    }
}
