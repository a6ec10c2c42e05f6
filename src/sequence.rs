//! Fibonacci sequence generation and consecutive-term ratios
//!
//! Terms are arbitrary-precision so any requested length can be produced.
//! Ratios are computed from the exact integers and only then narrowed to
//! `f64`, which keeps them accurate long after the terms themselves have
//! left the `f64` range.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// The golden ratio φ = (1 + √5) / 2
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// √5, the denominator of the Binet approximation
pub const SQRT_5: f64 = 2.236_067_977_499_79;

/// Operands wider than this are shifted down before conversion to `f64`
const F64_SAFE_BITS: u64 = 960;

/// An immutable prefix of the Fibonacci sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    terms: Vec<BigUint>,
}

impl Sequence {
    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[BigUint] {
        &self.terms
    }

    /// `(n, F(n))` pairs in order
    pub fn rows(&self) -> impl Iterator<Item = (usize, &BigUint)> {
        self.terms.iter().enumerate()
    }
}

/// Generate the first `n` Fibonacci numbers, starting 0, 1
///
/// A non-positive `n` yields an empty sequence.
pub fn generate(n: i64) -> Sequence {
    if n <= 0 {
        return Sequence::default();
    }
    let n = usize::try_from(n).unwrap_or(usize::MAX);
    tracing::debug!(terms = n, "generating sequence");

    let mut terms = Vec::with_capacity(n.min(1 << 16));
    terms.push(BigUint::zero());
    if n >= 2 {
        terms.push(BigUint::one());
    }
    for i in 2..n {
        let next = &terms[i - 1] + &terms[i - 2];
        terms.push(next);
    }

    Sequence { terms }
}

/// Ratios of consecutive terms, `F(i+1) / F(i)` at position `i`
///
/// Positions whose denominator is zero are `None`. The result has one entry
/// fewer than the sequence (none for sequences shorter than two terms).
pub fn ratios(sequence: &Sequence) -> Vec<Option<f64>> {
    sequence
        .terms()
        .windows(2)
        .map(|pair| ratio(&pair[1], &pair[0]))
        .collect()
}

/// Defined ratios keyed by the index of their numerator term
///
/// Position `i` of the ratio series describes `F(i+1) / F(i)`, so it is
/// reported as `n = i + 1`.
pub fn convergence_points(ratios: &[Option<f64>]) -> Vec<(usize, f64)> {
    ratios
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.map(|r| (i + 1, r)))
        .collect()
}

/// Binet approximation φˣ/√5
pub fn binet(x: f64) -> f64 {
    GOLDEN_RATIO.powf(x) / SQRT_5
}

/// Convert a term to `f64`, clamping values beyond the range to `f64::MAX`
pub fn to_f64_saturating(value: &BigUint) -> f64 {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .unwrap_or(f64::MAX)
}

fn ratio(numerator: &BigUint, denominator: &BigUint) -> Option<f64> {
    if denominator.is_zero() {
        return None;
    }
    let shift = denominator.bits().saturating_sub(F64_SAFE_BITS);
    let num = (numerator >> shift).to_f64()?;
    let den = (denominator >> shift).to_f64()?;
    Some(num / den)
}
