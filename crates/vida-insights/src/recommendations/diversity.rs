use super::rules::ScoredCandidate;
use crate::catalog::domain::PrimaryTag;
use std::collections::HashSet;

/// Top-K walk over a ranked list that avoids repeating a primary tag.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DiversitySelector {
    max_results: usize,
    min_pool: usize,
}

pub(crate) struct Selection<'a> {
    pub picks: Vec<ScoredCandidate<'a>>,
    pub backfilled: usize,
}

impl DiversitySelector {
    pub fn new(max_results: usize, min_pool: usize) -> Self {
        Self {
            max_results,
            min_pool,
        }
    }

    /// `ranked` must already be ordered by score. Picks come back in ranked
    /// order. When distinct primary tags run out before `max_results` is
    /// reached, skipped candidates fill the remaining slots by rank.
    pub fn select<'a>(&self, ranked: Vec<ScoredCandidate<'a>>) -> Selection<'a> {
        let relaxed = ranked.len() < self.min_pool;
        let mut chosen = vec![false; ranked.len()];
        let mut used: HashSet<PrimaryTag<'a>> = HashSet::new();
        let mut selected = 0;

        for (position, candidate) in ranked.iter().enumerate() {
            if selected >= self.max_results {
                break;
            }

            let tag = candidate.primary_tag();
            if relaxed || !used.contains(&tag) {
                used.insert(tag);
                chosen[position] = true;
                selected += 1;
            }
        }

        let mut backfilled = 0;
        for slot in chosen.iter_mut() {
            if selected >= self.max_results {
                break;
            }
            if !*slot {
                *slot = true;
                selected += 1;
                backfilled += 1;
            }
        }

        let picks = ranked
            .into_iter()
            .zip(chosen)
            .filter_map(|(candidate, keep)| keep.then_some(candidate))
            .collect();

        Selection { picks, backfilled }
    }
}
