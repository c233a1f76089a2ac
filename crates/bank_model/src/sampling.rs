//! Final-exam sampling: pool selection and clamped sample size

use crate::Question;
use rand::seq::SliceRandom;
use rand::Rng;

/// Smallest sample drawn when the pool allows it
pub const SAMPLE_MIN: usize = 5;
/// Largest sample ever drawn
pub const SAMPLE_MAX: usize = 10;

/// Questions eligible for the final-exam sample: the configured category's
/// questions when one is set, otherwise the full list.
pub fn sample_pool<'a>(
    questions: &'a [Question],
    final_exam_category: Option<u64>,
) -> Vec<&'a Question> {
    match final_exam_category {
        Some(category_id) => questions
            .iter()
            .filter(|q| q.category_id == category_id)
            .collect(),
        None => questions.iter().collect(),
    }
}

/// Sample size for a pool: clamped to 5..=10 and never larger than the
/// pool itself. An empty pool samples nothing.
pub fn sample_size(pool_len: usize) -> usize {
    SAMPLE_MIN.max(SAMPLE_MAX.min(pool_len)).min(pool_len)
}

/// Draw a uniform random subset of the pool without replacement.
///
/// The generator is a parameter so callers control determinism; selection
/// order is not meaningful.
pub fn sample_questions<'a, R: Rng + ?Sized>(
    pool: &[&'a Question],
    rng: &mut R,
) -> Vec<&'a Question> {
    let count = sample_size(pool.len());
    pool.choose_multiple(rng, count).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: u64, category_id: u64) -> Question {
        Question {
            id,
            name: format!("q{id}"),
            text: String::new(),
            qtype: "multichoice".to_string(),
            category_name: format!("cat{category_id}"),
            category_id,
        }
    }

    #[test]
    fn test_sample_size_boundaries() {
        assert_eq!(sample_size(0), 0);
        assert_eq!(sample_size(3), 3);
        assert_eq!(sample_size(5), 5);
        assert_eq!(sample_size(7), 7);
        assert_eq!(sample_size(10), 10);
        assert_eq!(sample_size(50), 10);
    }

    #[test]
    fn test_pool_honors_category_filter() {
        let questions: Vec<Question> = (0..6).map(|i| question(i, i % 2)).collect();
        let pool = sample_pool(&questions, Some(1));
        assert_eq!(pool.len(), 3);
        assert!(pool.iter().all(|q| q.category_id == 1));

        let pool = sample_pool(&questions, None);
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn test_sample_membership_and_uniqueness() {
        let questions: Vec<Question> = (0..50).map(|i| question(i, 1)).collect();
        let pool = sample_pool(&questions, None);
        let mut rng = StdRng::seed_from_u64(7);

        let sample = sample_questions(&pool, &mut rng);
        assert!(sample.len() >= SAMPLE_MIN && sample.len() <= SAMPLE_MAX);

        let mut ids: Vec<u64> = sample.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), sample.len());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let questions: Vec<Question> = (0..20).map(|i| question(i, 1)).collect();
        let pool = sample_pool(&questions, None);

        let a: Vec<u64> = sample_questions(&pool, &mut StdRng::seed_from_u64(42))
            .iter()
            .map(|q| q.id)
            .collect();
        let b: Vec<u64> = sample_questions(&pool, &mut StdRng::seed_from_u64(42))
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_sample_size_bounds(pool_len in 0usize..200) {
            let n = sample_size(pool_len);
            prop_assert!(n <= SAMPLE_MAX.min(pool_len));
            prop_assert!(n >= SAMPLE_MIN.min(pool_len));
        }
    }
}
