//! Quiz candidate filtering and random selection

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::Question;

/// Drop every question whose id was already served in this quiz.
pub fn quiz_candidates(questions: Vec<Question>, previous: &[i32]) -> Vec<Question> {
    let served: HashSet<i32> = previous.iter().copied().collect();
    questions
        .into_iter()
        .filter(|q| !served.contains(&q.id))
        .collect()
}

/// Pick one item uniformly at random; `None` when there is nothing to pick.
pub fn pick_random<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i32, category: i32) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn excludes_previous_questions() {
        let questions = (20..26).map(|id| question(id, 2)).collect();
        let ids: Vec<i32> = quiz_candidates(questions, &[23, 24])
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![20, 21, 22, 25]);
    }

    #[test]
    fn everything_served_leaves_no_candidates() {
        let questions = vec![question(1, 1), question(2, 1)];
        assert!(quiz_candidates(questions, &[2, 1]).is_empty());
    }

    #[test]
    fn empty_slice_picks_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<Question> = Vec::new();
        assert!(pick_random(&items, &mut rng).is_none());
    }

    #[test]
    fn single_item_is_always_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = vec![question(9, 4)];
        for _ in 0..10 {
            assert_eq!(pick_random(&items, &mut rng).map(|q| q.id), Some(9));
        }
    }

    #[test]
    fn every_item_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<i32> = (0..4).collect();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(*pick_random(&items, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), items.len());
    }
}
