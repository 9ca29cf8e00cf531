use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use rand::distr::Uniform;

/// Generate `n` random elements using [`rand::rng()`].
///
/// For `f64`, the elements are drawn uniformly from `[0, 1)`.
pub fn random_elements<T>(n: usize) -> Vec<T>
where
    StandardUniform: Distribution<T>,
{
    rand::rng().sample_iter(StandardUniform).take(n).collect()
}

/// Generate `n` random integers in `[-bound, bound]`, as `f64`.
///
/// Sums and products of such values are exact as long as they stay below
/// 2^53, which makes them handy for exact comparisons of polynomial
/// arithmetic.
///
/// # Panics
///
/// Panics if `bound` is negative.
pub fn random_small_integers(n: usize, bound: i32) -> Vec<f64> {
    let distribution =
        Uniform::new_inclusive(-bound, bound).expect("bound should be non-negative");
    rand::rng()
        .sample_iter(distribution)
        .take(n)
        .map(f64::from)
        .collect()
}
