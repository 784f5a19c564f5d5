//! Entropy and information gain.
use std::collections::HashMap;

use crate::error::{Id3Error, Result};
use crate::dataset::{Column, Value};


/// Returns the Shannon entropy (base 2) of the given probabilities.
/// Zero probabilities contribute nothing; an empty slice yields `0`.
/// The input is not checked to sum to one.
#[inline]
pub fn entropy(probabilities: &[f64]) -> f64 {
    probabilities.iter()
        .filter(|&&p| p != 0f64)
        .fold(0f64, |acc, &p| acc - p * p.log2())
}


/// Returns the information gain `base - conditional`.
/// No sign check is made.
#[inline(always)]
pub fn gain(base: f64, conditional: f64) -> f64 {
    base - conditional
}


/// Returns the entropy of the `decision` column
/// conditioned on the value of `attribute`:
/// `sum_g |g| / |T| * entropy(decision | g)`
/// over the groups `g` of equal `attribute` values.
///
/// Both columns must have the same, non-zero length.
pub fn conditional_entropy(attribute: &Column, decision: &Column)
    -> Result<f64>
{
    if attribute.len() != decision.len() {
        return Err(Id3Error::RowCountMismatch {
            column:   decision.name().to_string(),
            expected: attribute.len(),
            got:      decision.len(),
        });
    }
    if attribute.is_empty() {
        return Err(Id3Error::EmptyDataset);
    }

    // Rows of each group, groups in first-seen order.
    let mut index = HashMap::<&Value, usize>::new();
    let mut groups = Vec::<Vec<&Value>>::new();
    for (a, y) in attribute.values().iter().zip(decision.values()) {
        let g = *index.entry(a)
            .or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
        groups[g].push(y);
    }

    let n_rows = attribute.len() as f64;
    let conditional = groups.iter()
        .map(|group| {
            let weight = group.len() as f64 / n_rows;
            weight * entropy(&distribution(group.iter().copied())[..])
        })
        .sum::<f64>();
    Ok(conditional)
}


/// Returns the relative frequencies of the given values in first-seen order.
pub(crate) fn distribution<'a, I>(values: I) -> Vec<f64>
    where I: Iterator<Item = &'a Value>,
{
    let mut index = HashMap::<&Value, usize>::new();
    let mut counts = Vec::<usize>::new();
    for value in values {
        let i = *index.entry(value)
            .or_insert_with(|| {
                counts.push(0);
                counts.len() - 1
            });
        counts[i] += 1;
    }

    let total = counts.iter().sum::<usize>() as f64;
    counts.into_iter()
        .map(|c| c as f64 / total)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand::seq::SliceRandom;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn random_distribution(rng: &mut StdRng, k: usize) -> Vec<f64> {
        let weights = (0..k)
            .map(|_| rng.gen_range(0..10) as f64)
            .collect::<Vec<_>>();
        let total = weights.iter().sum::<f64>().max(1f64);
        weights.into_iter().map(|w| w / total).collect()
    }

    #[test]
    fn entropy_of_uniform_distribution() {
        for k in 1..=16 {
            let p = vec![1f64 / k as f64; k];
            let expected = (k as f64).log2();
            let e = entropy(&p[..]);
            assert!(
                (expected - e).abs() < TEST_TOLERANCE,
                "k = {k}: expected {expected}, got {e}.",
            );
        }
    }

    #[test]
    fn entropy_of_certain_outcome_is_zero() {
        assert_eq!(entropy(&[1f64]), 0f64);
        assert_eq!(entropy(&[0f64, 1f64, 0f64]), 0f64);
    }

    #[test]
    fn entropy_of_empty_slice_is_zero() {
        assert_eq!(entropy(&[]), 0f64);
    }

    #[test]
    fn entropy_skips_zero_terms() {
        let e = entropy(&[0.5, 0f64, 0.5]);
        assert!((e - 1f64).abs() < TEST_TOLERANCE, "got {e}");
        assert!(e.is_finite());
    }

    #[test]
    fn entropy_is_non_negative_and_symmetric() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..200 {
            let k = rng.gen_range(1..8);
            let mut p = random_distribution(&mut rng, k);
            let e = entropy(&p[..]);
            assert!(e >= -TEST_TOLERANCE, "negative entropy {e} for {p:?}");

            p.shuffle(&mut rng);
            let shuffled = entropy(&p[..]);
            assert!(
                (e - shuffled).abs() < TEST_TOLERANCE,
                "expected {e}, got {shuffled}",
            );
        }
    }

    #[test]
    fn gain_is_a_plain_difference() {
        assert_eq!(gain(1f64, 0.25), 0.75);
        assert!(gain(0.25, 1f64) < 0f64);
    }

    #[test]
    fn conditional_entropy_of_perfect_split() {
        let weather = Column::from_values("Weather", ["Sunny", "Sunny", "Rainy", "Rainy"]);
        let survived = Column::from_values("Survived", ["Yes", "Yes", "No", "No"]);

        let base = entropy(&survived.distribution()[..]);
        assert!((base - 1f64).abs() < TEST_TOLERANCE);

        let c = conditional_entropy(&weather, &survived).unwrap();
        assert!(c.abs() < TEST_TOLERANCE, "got {c}");
        assert!((gain(base, c) - 1f64).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn conditional_entropy_of_useless_attribute() {
        let coin = Column::from_values("Coin", ["H", "T", "H", "T"]);
        let survived = Column::from_values("Survived", [1_i64, 1, 0, 0]);

        let c = conditional_entropy(&coin, &survived).unwrap();
        assert!((c - 1f64).abs() < TEST_TOLERANCE, "got {c}");
    }

    #[test]
    fn conditional_entropy_weights_groups() {
        // Group `a` (3 rows): {1, 1, 0}, group `b` (1 row): {0}.
        let attr = Column::from_values("a", ["a", "a", "a", "b"]);
        let y = Column::from_values("y", [1_i64, 1, 0, 0]);

        let expected = 0.75 * entropy(&[2f64 / 3f64, 1f64 / 3f64]);
        let c = conditional_entropy(&attr, &y).unwrap();
        assert!((expected - c).abs() < TEST_TOLERANCE, "expected {expected}, got {c}");
    }

    #[test]
    fn conditional_entropy_rejects_empty_columns() {
        let attr = Column::new("a", Vec::new());
        let y = Column::new("y", Vec::new());
        assert!(matches!(
            conditional_entropy(&attr, &y),
            Err(Id3Error::EmptyDataset)
        ));
    }

    #[test]
    fn gain_is_non_negative_for_random_partitions() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.gen_range(1..40);
            let attr = Column::from_values(
                "a", (0..n).map(|_| rng.gen_range(0..4_i64)).collect::<Vec<_>>()
            );
            let y = Column::from_values(
                "y", (0..n).map(|_| rng.gen_range(0..3_i64)).collect::<Vec<_>>()
            );

            let base = entropy(&y.distribution()[..]);
            let c = conditional_entropy(&attr, &y).unwrap();
            let g = gain(base, c);
            assert!(g >= -TEST_TOLERANCE, "negative gain {g}");
        }
    }

    #[test]
    fn distribution_sums_to_one() {
        let values = [1_i64, 2, 2, 3, 3, 3].map(Value::Int);
        let p = distribution(values.iter());
        let sum = p.iter().sum::<f64>();
        assert!((sum - 1f64).abs() < TEST_TOLERANCE);
        assert_eq!(p.len(), 3);
    }
}
