use thiserror::Error;

/// Reasons an [`AliasSampler`](crate::AliasSampler) cannot be built.
///
/// All of these are detected up front; no partially built sampler is ever
/// handed out.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BuildError {
    #[error("weights slice is empty")]
    Empty,
    /// The first negative weight, with its position in the input.
    #[error("{value:.6} is below zero")]
    Negative { index: usize, value: f64 },
    /// Every weight is zero, or the total overflowed / is NaN.
    #[error("sum of weights is not a positive finite number: {sum}")]
    Degenerate { sum: f64 },
}
